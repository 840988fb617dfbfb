use anyhow::{Context, Result};
use common::{GrowthTable, RevenueTimeseries, ScenarioAssumptions, ScenarioOutlook};
use model::{Dataset, Region, Scenario, Segment};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, trace};

use crate::helpers::converters::convert_dataframe_to_timeseries;

/// Everything the API serves for one scenario, bundled for offline use
#[derive(Debug, Serialize)]
pub struct ExportBundle {
    pub scenario: String,
    pub assumptions: ScenarioAssumptions,
    pub outlook: ScenarioOutlook,
    pub regional_timeseries: RevenueTimeseries,
    pub segment_timeseries: RevenueTimeseries,
    pub regional_growth: GrowthTable,
    pub segment_growth: GrowthTable,
}

pub fn export(scenario_name: &str, output: Option<&Path>) -> Result<()> {
    trace!("Entering export function");
    let scenario: Scenario = scenario_name.parse()?;
    debug!("Exporting scenario: {}", scenario);

    let dataset = Dataset::baseline();
    let bundle = build_bundle(&dataset, scenario)?;

    let json = serde_json::to_string_pretty(&bundle)
        .context("Failed to serialize projection bundle")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Exported {} scenario to {}", scenario, path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_bundle(dataset: &Dataset, scenario: Scenario) -> Result<ExportBundle> {
    let assumptions = compute::assumptions::scenario_assumptions(dataset, scenario)?;
    let outlook = compute::outlook::scenario_outlook(dataset, scenario)?;
    let regional_growth = compute::regional::regional_growth(dataset, scenario)?;
    let segment_growth = compute::segments::segment_growth(dataset, scenario)?;

    let regional_df = compute::regional::regional_timeseries(dataset, &Region::ALL, scenario)?;
    let regional_timeseries =
        convert_dataframe_to_timeseries(regional_df).map_err(|e| anyhow::anyhow!(e))?;

    let segment_df = compute::segments::segment_timeseries(dataset, &Segment::ALL, scenario)?;
    let segment_timeseries =
        convert_dataframe_to_timeseries(segment_df).map_err(|e| anyhow::anyhow!(e))?;

    Ok(ExportBundle {
        scenario: scenario.to_string(),
        assumptions,
        outlook,
        regional_timeseries,
        segment_timeseries,
        regional_growth,
        segment_growth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_build_bundle_normal_scenario() {
        let dataset = Dataset::baseline();
        let bundle = build_bundle(&dataset, Scenario::Normal).unwrap();

        assert_eq!(bundle.scenario, "normal");
        // Six regions and five segments over nine years each
        assert_eq!(bundle.regional_timeseries.len(), 54);
        assert_eq!(bundle.segment_timeseries.len(), 45);
        assert_eq!(bundle.regional_growth.record_count(), 6);
        assert_eq!(bundle.segment_growth.record_count(), 5);
        assert_eq!(
            bundle.outlook.final_total(),
            Some(Decimal::from_str("2903.93").unwrap())
        );
    }

    #[test]
    fn test_export_rejects_unknown_scenario() {
        let result = export("apocalyptic", None);
        assert!(result.is_err());
    }
}
