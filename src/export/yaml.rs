//! YAML Export functionality

use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::export::json::DashboardExport;

/// Write an export as YAML with a short comment header
pub fn export_dashboard_yaml<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
) -> DashboardResult<()> {
    let header = format!(
        "# Finance dashboard export\n# Generated: {}\n# App Version: {}\n# Period: {}\n\n",
        export.exported_at,
        export.app_version,
        export.period.label()
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| DashboardError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> DashboardResult<DashboardExport> {
    let export: DashboardExport =
        serde_yaml::from_str(yaml_str).map_err(|e| DashboardError::Import(e.to_string()))?;

    export.validate().map_err(DashboardError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DashboardOptions;
    use crate::export::json::tests::sample_store;
    use crate::models::MonthPeriod;

    #[test]
    fn test_yaml_export() {
        let export = DashboardExport::from_session(
            &sample_store(),
            MonthPeriod::new(2025, 1).unwrap(),
            DashboardOptions::default(),
        );

        let mut output = Vec::new();
        export_dashboard_yaml(&export, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Finance dashboard export"));
        assert!(yaml.contains("# Period: Jan 2025"));
        assert!(yaml.contains("schema_version:"));

        let imported = import_from_yaml(&yaml).unwrap();
        assert_eq!(imported.metadata, export.metadata);
        assert_eq!(imported.budgets, export.budgets);
    }
}
