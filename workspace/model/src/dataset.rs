//! The baseline dataset: three years of observed revenue per region and
//! segment, plus the growth assumptions behind each forecast scenario.
//!
//! All values are billions of dollars; all rates are fractions (0.12 = 12%).
//! The dataset is a plain value constructed by [`Dataset::baseline`] and
//! passed by reference into every computation. Nothing in it changes at
//! runtime.

use crate::region::Region;
use crate::scenario::Scenario;
use crate::segment::Segment;
use crate::series::{Year, YearValue};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

const START_YEAR: Year = 2022;
const BASE_YEAR: Year = 2024;
const END_YEAR: Year = 2030;

/// Regional growth assumption for one scenario. The first forecast year uses
/// `first_year_rate`, every remaining horizon year uses `outer_years_rate`.
/// The baseline ships both rates equal; the split exists because the
/// published assumption table carries the two ranges as separate columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionAssumption {
    pub first_year_rate: Decimal,
    pub outer_years_rate: Decimal,
    pub rationale: &'static str,
}

/// Immutable model inputs.
#[derive(Debug, Clone)]
pub struct Dataset {
    base_year: Year,
    start_year: Year,
    end_year: Year,
    regional_actuals: BTreeMap<Region, Vec<YearValue>>,
    segment_actuals: BTreeMap<Segment, Vec<YearValue>>,
    region_assumptions: BTreeMap<Scenario, BTreeMap<Region, RegionAssumption>>,
    segment_rates: BTreeMap<Scenario, BTreeMap<Segment, Decimal>>,
    launch_schedules: BTreeMap<Scenario, BTreeMap<Segment, BTreeMap<Year, Decimal>>>,
}

impl Dataset {
    /// The published dataset: 2022-2024 actuals, 2025-2030 horizon, and the
    /// assumption sets for all three scenarios.
    pub fn baseline() -> Self {
        let regional_rows: [(Region, [Decimal; 3]); 6] = [
            (
                Region::UnitedStates,
                [dec!(405.53), dec!(452.80), dec!(438.00)],
            ),
            (Region::China, [dec!(181.45), dec!(251.01), dec!(250.24)]),
            (Region::Europe, [dec!(80.00), dec!(100.41), dec!(104.26)]),
            (Region::AsiaPacific, [dec!(40.00), dec!(55.78), dec!(62.56)]),
            (Region::MiddleEast, [dec!(15.00), dec!(20.08), dec!(20.85)]),
            (Region::Other, [dec!(92.64), dec!(87.82), dec!(101.15)]),
        ];
        let mut regional_actuals = BTreeMap::new();
        for (region, values) in regional_rows {
            regional_actuals.insert(region, actual_series(values));
        }

        let segment_rows: [(Segment, [Decimal; 3]); 5] = [
            (
                Segment::Automotive,
                [dec!(714.62), dec!(824.19), dec!(770.70)],
            ),
            (Segment::Energy, [dec!(39.09), dec!(60.35), dec!(100.86)]),
            (Segment::Services, [dec!(60.91), dec!(83.19), dec!(105.34)]),
            (
                Segment::HumanoidRobotics,
                [dec!(0.00), dec!(0.00), dec!(0.00)],
            ),
            (
                Segment::AutonomousRideHailing,
                [dec!(0.00), dec!(0.00), dec!(0.00)],
            ),
        ];
        let mut segment_actuals = BTreeMap::new();
        for (segment, values) in segment_rows {
            segment_actuals.insert(segment, actual_series(values));
        }

        // (region, conservative, normal, optimistic, rationale)
        let region_rate_rows: [(Region, Decimal, Decimal, Decimal, &'static str); 6] = [
            (
                Region::UnitedStates,
                dec!(0.02),
                dec!(0.04),
                dec!(0.06),
                "Mature market with steady growth",
            ),
            (
                Region::China,
                dec!(0.04),
                dec!(0.07),
                dec!(0.10),
                "Intense competition but still growing",
            ),
            (
                Region::Europe,
                dec!(0.08),
                dec!(0.12),
                dec!(0.16),
                "Policy-driven growth",
            ),
            (
                Region::AsiaPacific,
                dec!(0.14),
                dec!(0.20),
                dec!(0.26),
                "High-speed growth in emerging markets",
            ),
            (
                Region::MiddleEast,
                dec!(0.10),
                dec!(0.15),
                dec!(0.20),
                "Demand from the transition away from oil",
            ),
            (
                Region::Other,
                dec!(0.04),
                dec!(0.064),
                dec!(0.09),
                "Steady growth across diversified markets",
            ),
        ];
        let mut region_assumptions: BTreeMap<Scenario, BTreeMap<Region, RegionAssumption>> =
            BTreeMap::new();
        for (region, conservative, normal, optimistic, rationale) in region_rate_rows {
            let per_scenario = [
                (Scenario::Conservative, conservative),
                (Scenario::Normal, normal),
                (Scenario::Optimistic, optimistic),
            ];
            for (scenario, rate) in per_scenario {
                region_assumptions.entry(scenario).or_default().insert(
                    region,
                    RegionAssumption {
                        first_year_rate: rate,
                        outer_years_rate: rate,
                        rationale,
                    },
                );
            }
        }

        // (segment, conservative, normal, optimistic)
        let segment_rate_rows: [(Segment, Decimal, Decimal, Decimal); 3] = [
            (Segment::Automotive, dec!(0.04), dec!(0.08), dec!(0.12)),
            (Segment::Energy, dec!(0.28), dec!(0.40), dec!(0.50)),
            (Segment::Services, dec!(0.18), dec!(0.26), dec!(0.34)),
        ];
        let mut segment_rates: BTreeMap<Scenario, BTreeMap<Segment, Decimal>> = BTreeMap::new();
        for (segment, conservative, normal, optimistic) in segment_rate_rows {
            let per_scenario = [
                (Scenario::Conservative, conservative),
                (Scenario::Normal, normal),
                (Scenario::Optimistic, optimistic),
            ];
            for (scenario, rate) in per_scenario {
                segment_rates
                    .entry(scenario)
                    .or_default()
                    .insert(segment, rate);
            }
        }

        let schedule_rows: Vec<(Scenario, Segment, Vec<(Year, Decimal)>)> = vec![
            (
                Scenario::Conservative,
                Segment::HumanoidRobotics,
                vec![
                    (2027, dec!(10)),
                    (2028, dec!(40)),
                    (2029, dec!(100)),
                    (2030, dec!(180)),
                ],
            ),
            (
                Scenario::Conservative,
                Segment::AutonomousRideHailing,
                vec![(2028, dec!(20)), (2029, dec!(60)), (2030, dec!(120))],
            ),
            (
                Scenario::Normal,
                Segment::HumanoidRobotics,
                vec![
                    (2026, dec!(3)),
                    (2027, dec!(20)),
                    (2028, dec!(90)),
                    (2029, dec!(200)),
                    (2030, dec!(300)),
                ],
            ),
            (
                Scenario::Normal,
                Segment::AutonomousRideHailing,
                vec![
                    (2027, dec!(5)),
                    (2028, dec!(80)),
                    (2029, dec!(130)),
                    (2030, dec!(200)),
                ],
            ),
            (
                Scenario::Optimistic,
                Segment::HumanoidRobotics,
                vec![
                    (2025, dec!(1)),
                    (2026, dec!(8)),
                    (2027, dec!(45)),
                    (2028, dec!(140)),
                    (2029, dec!(280)),
                    (2030, dec!(430)),
                ],
            ),
            (
                Scenario::Optimistic,
                Segment::AutonomousRideHailing,
                vec![
                    (2026, dec!(2)),
                    (2027, dec!(15)),
                    (2028, dec!(110)),
                    (2029, dec!(190)),
                    (2030, dec!(290)),
                ],
            ),
        ];
        let mut launch_schedules: BTreeMap<Scenario, BTreeMap<Segment, BTreeMap<Year, Decimal>>> =
            BTreeMap::new();
        for (scenario, segment, steps) in schedule_rows {
            launch_schedules
                .entry(scenario)
                .or_default()
                .insert(segment, steps.into_iter().collect());
        }

        Self {
            base_year: BASE_YEAR,
            start_year: START_YEAR,
            end_year: END_YEAR,
            regional_actuals,
            segment_actuals,
            region_assumptions,
            segment_rates,
            launch_schedules,
        }
    }

    /// Last year with observed actuals; projections are anchored here.
    pub fn base_year(&self) -> Year {
        self.base_year
    }

    /// First year with observed actuals.
    pub fn start_year(&self) -> Year {
        self.start_year
    }

    /// Last year of the forecast horizon.
    pub fn end_year(&self) -> Year {
        self.end_year
    }

    pub fn historical_years(&self) -> Vec<Year> {
        (self.start_year..=self.base_year).collect()
    }

    pub fn forecast_years(&self) -> Vec<Year> {
        (self.base_year + 1..=self.end_year).collect()
    }

    pub fn coverage_years(&self) -> Vec<Year> {
        (self.start_year..=self.end_year).collect()
    }

    pub fn covers(&self, year: Year) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn is_historical(&self, year: Year) -> bool {
        year <= self.base_year
    }

    /// Observed series for one region, in ascending year order.
    pub fn regional_actuals(&self, region: Region) -> Option<&[YearValue]> {
        self.regional_actuals.get(&region).map(Vec::as_slice)
    }

    pub fn regional_actual(&self, region: Region, year: Year) -> Option<Decimal> {
        self.regional_actuals(region)?
            .iter()
            .find(|point| point.year == year)
            .map(|point| point.value)
    }

    /// Observed series for one segment, in ascending year order.
    pub fn segment_actuals(&self, segment: Segment) -> Option<&[YearValue]> {
        self.segment_actuals.get(&segment).map(Vec::as_slice)
    }

    pub fn segment_actual(&self, segment: Segment, year: Year) -> Option<Decimal> {
        self.segment_actuals(segment)?
            .iter()
            .find(|point| point.year == year)
            .map(|point| point.value)
    }

    pub fn region_assumption(
        &self,
        scenario: Scenario,
        region: Region,
    ) -> Option<&RegionAssumption> {
        self.region_assumptions.get(&scenario)?.get(&region)
    }

    /// Annual growth rate for an established segment. `None` for emerging
    /// segments, which follow launch schedules instead.
    pub fn segment_rate(&self, scenario: Scenario, segment: Segment) -> Option<Decimal> {
        self.segment_rates.get(&scenario)?.get(&segment).copied()
    }

    /// Launch schedule for an emerging segment. `None` for established
    /// segments.
    pub fn launch_schedule(
        &self,
        scenario: Scenario,
        segment: Segment,
    ) -> Option<&BTreeMap<Year, Decimal>> {
        self.launch_schedules.get(&scenario)?.get(&segment)
    }
}

fn actual_series(values: [Decimal; 3]) -> Vec<YearValue> {
    values
        .into_iter()
        .enumerate()
        .map(|(offset, value)| YearValue::new(START_YEAR + offset as Year, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_covers_every_region_and_segment() {
        let dataset = Dataset::baseline();

        for region in Region::ALL {
            let actuals = dataset.regional_actuals(region).unwrap();
            assert_eq!(actuals.len(), 3);
            for year in dataset.historical_years() {
                assert!(dataset.regional_actual(region, year).is_some());
            }
        }
        for segment in Segment::ALL {
            assert_eq!(dataset.segment_actuals(segment).unwrap().len(), 3);
        }
    }

    #[test]
    fn test_baseline_year_layout() {
        let dataset = Dataset::baseline();

        assert_eq!(dataset.historical_years(), vec![2022, 2023, 2024]);
        assert_eq!(
            dataset.forecast_years(),
            vec![2025, 2026, 2027, 2028, 2029, 2030]
        );
        assert!(dataset.covers(2022) && dataset.covers(2030));
        assert!(!dataset.covers(2021) && !dataset.covers(2031));
        assert!(dataset.is_historical(2024));
        assert!(!dataset.is_historical(2025));
    }

    #[test]
    fn test_baseline_actual_values() {
        let dataset = Dataset::baseline();

        assert_eq!(
            dataset.regional_actual(Region::China, 2024),
            Some(dec!(250.24))
        );
        assert_eq!(
            dataset.regional_actual(Region::Europe, 2022),
            Some(dec!(80.00))
        );
        assert_eq!(
            dataset.segment_actual(Segment::Automotive, 2023),
            Some(dec!(824.19))
        );
        assert_eq!(
            dataset.segment_actual(Segment::HumanoidRobotics, 2024),
            Some(dec!(0))
        );
        assert_eq!(dataset.regional_actual(Region::China, 2025), None);
    }

    #[test]
    fn test_assumptions_exist_for_every_scenario() {
        let dataset = Dataset::baseline();

        for scenario in Scenario::ALL {
            for region in Region::ALL {
                assert!(dataset.region_assumption(scenario, region).is_some());
            }
            for segment in Segment::ESTABLISHED {
                assert!(dataset.segment_rate(scenario, segment).is_some());
                assert!(dataset.launch_schedule(scenario, segment).is_none());
            }
            for segment in Segment::EMERGING {
                assert!(dataset.launch_schedule(scenario, segment).is_some());
                assert!(dataset.segment_rate(scenario, segment).is_none());
            }
        }
    }

    #[test]
    fn test_published_normal_rates() {
        let dataset = Dataset::baseline();

        let europe = dataset
            .region_assumption(Scenario::Normal, Region::Europe)
            .unwrap();
        assert_eq!(europe.first_year_rate, dec!(0.12));
        assert_eq!(europe.outer_years_rate, dec!(0.12));

        let other = dataset
            .region_assumption(Scenario::Normal, Region::Other)
            .unwrap();
        assert_eq!(other.first_year_rate, dec!(0.064));

        assert_eq!(
            dataset.segment_rate(Scenario::Normal, Segment::Energy),
            Some(dec!(0.40))
        );
    }

    #[test]
    fn test_scenarios_order_rates_consistently() {
        let dataset = Dataset::baseline();

        for region in Region::ALL {
            let conservative = dataset
                .region_assumption(Scenario::Conservative, region)
                .unwrap();
            let normal = dataset.region_assumption(Scenario::Normal, region).unwrap();
            let optimistic = dataset
                .region_assumption(Scenario::Optimistic, region)
                .unwrap();
            assert!(conservative.first_year_rate < normal.first_year_rate);
            assert!(normal.first_year_rate < optimistic.first_year_rate);
        }
    }

    #[test]
    fn test_launch_schedules_stay_inside_horizon() {
        let dataset = Dataset::baseline();

        for scenario in Scenario::ALL {
            for segment in Segment::EMERGING {
                let schedule = dataset.launch_schedule(scenario, segment).unwrap();
                assert!(!schedule.is_empty());
                for year in schedule.keys() {
                    assert!(*year > dataset.base_year());
                    assert!(*year <= dataset.end_year());
                }
            }
        }
    }

    #[test]
    fn test_normal_launch_schedule_values() {
        let dataset = Dataset::baseline();

        let robotics = dataset
            .launch_schedule(Scenario::Normal, Segment::HumanoidRobotics)
            .unwrap();
        assert_eq!(robotics.get(&2026), Some(&dec!(3)));
        assert_eq!(robotics.get(&2030), Some(&dec!(300)));
        assert_eq!(robotics.get(&2025), None);
    }
}
