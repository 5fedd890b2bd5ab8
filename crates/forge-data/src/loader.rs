//! Typed fixture loaders.
//!
//! JSON documents deserialize straight into the `forge-core` entities; the
//! CSV mirrors (historical projects, regional modifiers) go through flat
//! record structs.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use forge_core::entities::{
    BaseTemplate, CategoryModifiers, ConstraintCatalog, CostBreakdown, CostModel,
    HistoricalProject, HistoricalProjects, MarketModifiers, Personas, RegionalModifiers,
    StoreTypes, VendorCatalog, VendorRegistry,
};
use forge_core::enums::MarketTier;

use crate::DataError;

/// Read and deserialize one JSON fixture.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_store_types(root: &Path) -> Result<StoreTypes, DataError> {
    load_json(&root.join("01_Build_Templates").join("store_types.json"))
}

pub fn load_base_template(root: &Path) -> Result<BaseTemplate, DataError> {
    load_json(&root.join("01_Build_Templates").join("base_template.json"))
}

pub fn load_constraint_catalog(root: &Path) -> Result<ConstraintCatalog, DataError> {
    load_json(&root.join("02_Constraints").join("constraint_catalog.json"))
}

pub fn load_historical_projects(root: &Path) -> Result<HistoricalProjects, DataError> {
    load_json(
        &root
            .join("03_Historical_Projects")
            .join("historical_projects.json"),
    )
}

pub fn load_regional_modifiers(root: &Path) -> Result<RegionalModifiers, DataError> {
    load_json(
        &root
            .join("04_Regional_Modifiers")
            .join("regional_modifiers.json"),
    )
}

pub fn load_cost_model(root: &Path) -> Result<CostModel, DataError> {
    load_json(
        &root
            .join("05_Cost_Models")
            .join("cost_model_suburban_standard.json"),
    )
}

pub fn load_vendor_catalog(root: &Path) -> Result<VendorCatalog, DataError> {
    load_json(&root.join("06_Vendor_Data").join("vendor_catalog.json"))
}

pub fn load_personas(root: &Path) -> Result<Personas, DataError> {
    load_json(&root.join("config").join("personas.json"))
}

pub fn load_vendor_registry(root: &Path) -> Result<VendorRegistry, DataError> {
    load_json(&root.join("config").join("vendor_registry.json"))
}

// ── CSV mirrors ────────────────────────────────────────────────────

/// Flat row of `historical_projects.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalProjectRecord {
    pub store_id: String,
    pub store_type: String,
    pub square_footage: u32,
    pub market: String,
    pub completion_date: String,
    pub total_cost: i64,
    pub cost_per_sqft: f64,
    pub construction: i64,
    pub electrical: i64,
    pub hvac: i64,
    pub plumbing: i64,
    pub fixtures: i64,
    pub technology: i64,
    pub soft_costs: i64,
    pub timeline_days: u32,
    pub variance_from_budget: i32,
}

impl From<HistoricalProjectRecord> for HistoricalProject {
    fn from(record: HistoricalProjectRecord) -> Self {
        Self {
            store_id: record.store_id,
            store_type: record.store_type,
            square_footage: record.square_footage,
            market: record.market,
            completion_date: record.completion_date,
            total_cost: record.total_cost,
            cost_per_sqft: record.cost_per_sqft,
            categories: CostBreakdown {
                construction: record.construction,
                electrical: record.electrical,
                hvac: record.hvac,
                plumbing: record.plumbing,
                fixtures: record.fixtures,
                technology: record.technology,
                soft_costs: record.soft_costs,
            },
            timeline_days: record.timeline_days,
            variance_from_budget: record.variance_from_budget,
            lessons_learned: Vec::new(),
        }
    }
}

impl From<&HistoricalProject> for HistoricalProjectRecord {
    fn from(project: &HistoricalProject) -> Self {
        Self {
            store_id: project.store_id.clone(),
            store_type: project.store_type.clone(),
            square_footage: project.square_footage,
            market: project.market.clone(),
            completion_date: project.completion_date.clone(),
            total_cost: project.total_cost,
            cost_per_sqft: project.cost_per_sqft,
            construction: project.categories.construction,
            electrical: project.categories.electrical,
            hvac: project.categories.hvac,
            plumbing: project.categories.plumbing,
            fixtures: project.categories.fixtures,
            technology: project.categories.technology,
            soft_costs: project.categories.soft_costs,
            timeline_days: project.timeline_days,
            variance_from_budget: project.variance_from_budget,
        }
    }
}

/// Load the CSV mirror of the historical projects (lessons-learned strings
/// are JSON-only and come back empty).
pub fn load_historical_projects_csv(root: &Path) -> Result<HistoricalProjects, DataError> {
    let path = csv_path(root, "03_Historical_Projects", "historical_projects.csv");
    let mut reader = csv::Reader::from_path(&path)?;
    let mut projects = Vec::new();
    for record in reader.deserialize::<HistoricalProjectRecord>() {
        projects.push(record?.into());
    }
    Ok(HistoricalProjects { projects })
}

/// Flat row of `regional_modifiers.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalModifierRecord {
    pub market: String,
    pub state: String,
    pub tier: MarketTier,
    pub construction: f64,
    pub electrical: f64,
    pub hvac: f64,
    pub plumbing: f64,
    pub fixtures: f64,
    pub technology: f64,
    pub soft_costs: f64,
    pub notes: String,
}

pub fn load_regional_modifiers_csv(root: &Path) -> Result<RegionalModifiers, DataError> {
    let path = csv_path(root, "04_Regional_Modifiers", "regional_modifiers.csv");
    let mut reader = csv::Reader::from_path(&path)?;
    let mut markets = Vec::new();
    for record in reader.deserialize::<RegionalModifierRecord>() {
        let record = record?;
        markets.push(MarketModifiers {
            market: record.market,
            state: record.state,
            tier: record.tier,
            modifiers: CategoryModifiers {
                construction: record.construction,
                electrical: record.electrical,
                hvac: record.hvac,
                plumbing: record.plumbing,
                fixtures: record.fixtures,
                technology: record.technology,
                soft_costs: record.soft_costs,
            },
            notes: record.notes,
        });
    }
    Ok(RegionalModifiers { markets })
}

fn csv_path(root: &Path, folder: &str, file: &str) -> PathBuf {
    root.join(folder).join(file)
}

/// The full fixture bundle most commands need.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub store_types: StoreTypes,
    pub base_template: BaseTemplate,
    pub historical_projects: HistoricalProjects,
    pub regional_modifiers: RegionalModifiers,
    pub cost_model: CostModel,
    pub vendor_catalog: VendorCatalog,
    pub personas: Personas,
    pub vendor_registry: VendorRegistry,
}

impl Fixtures {
    /// Load every fixture from the dataset root. A missing file aborts the
    /// load with the failing path in the error.
    pub fn load(root: &Path) -> Result<Self, DataError> {
        Ok(Self {
            store_types: load_store_types(root)?,
            base_template: load_base_template(root)?,
            historical_projects: load_historical_projects(root)?,
            regional_modifiers: load_regional_modifiers(root)?,
            cost_model: load_cost_model(root)?,
            vendor_catalog: load_vendor_catalog(root)?,
            personas: load_personas(root)?,
            vendor_registry: load_vendor_registry(root)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fixture_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_store_types(dir.path());
        match result {
            Err(DataError::Read { path, .. }) => {
                assert!(path.ends_with("01_Build_Templates/store_types.json"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("01_Build_Templates");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("store_types.json"), "{ not json").unwrap();

        let result = load_store_types(dir.path());
        assert!(matches!(result, Err(DataError::Json { .. })));
    }

    #[test]
    fn historical_record_roundtrips_through_entity() {
        let record = HistoricalProjectRecord {
            store_id: "Store-50".into(),
            store_type: "suburban_standard".into(),
            square_footage: 3500,
            market: "Columbus".into(),
            completion_date: "2024-06-15".into(),
            total_cost: 647_500,
            cost_per_sqft: 185.0,
            construction: 226_625,
            electrical: 77_700,
            hvac: 51_800,
            plumbing: 32_375,
            fixtures: 161_875,
            technology: 51_800,
            soft_costs: 45_325,
            timeline_days: 84,
            variance_from_budget: 2,
        };
        let project: HistoricalProject = record.into();
        assert_eq!(project.categories.electrical, 77_700);
        let back: HistoricalProjectRecord = (&project).into();
        assert_eq!(back.electrical, 77_700);
        assert_eq!(back.store_id, "Store-50");
    }
}
