//! Small registry shared by the unit tests

use crate::model::{LookupOption, LookupTable, SizeCatalog};
use crate::registry::LookupTableRegistry;
use hvacalc_types::EnergyCarrier;

fn option(key: &str, weight: f64) -> LookupOption {
    LookupOption {
        key: key.to_string(),
        display_name: key.replace('-', " "),
        weight,
        metadata: String::new(),
        carrier: None,
    }
}

fn table(name: &str, options: Vec<LookupOption>) -> LookupTable {
    LookupTable {
        name: name.to_string(),
        description: String::new(),
        options,
    }
}

pub fn registry() -> LookupTableRegistry {
    let tables = vec![
        table(
            "cooling-climate",
            vec![
                option("hot-humid", 30.0),
                option("mixed-humid", 20.0),
                option("cold", 16.0),
            ],
        ),
        table(
            "insulation",
            vec![
                option("poor", 1.2),
                option("average", 1.0),
                option("excellent", 0.85),
            ],
        ),
        table(
            "sun-exposure",
            vec![option("shaded", 0.9), option("average", 1.0), option("sunny", 1.5)],
        ),
        table("occupant-activity", vec![option("typical", 600.0)]),
        table(
            "room-type",
            vec![option("bedroom", 0.0), option("kitchen", 4000.0)],
        ),
        table(
            "fuel",
            vec![
                LookupOption {
                    carrier: Some(EnergyCarrier::NaturalGas),
                    ..option("gas", 0.62)
                },
                LookupOption {
                    carrier: Some(EnergyCarrier::Electricity),
                    ..option("heat-pump", 3.5)
                },
                option("mystery", 1.0),
            ],
        ),
    ];
    let catalogs = vec![
        SizeCatalog::new("ac-tonnage", "ton", 12000.0, vec![1.5, 2.0, 2.5, 3.0]),
        SizeCatalog::new(
            "room-ac-btu",
            "BTU/h",
            1.0,
            vec![5000.0, 6000.0, 8000.0, 10000.0, 12000.0],
        ),
    ];
    LookupTableRegistry::from_parts("fixture", tables, catalogs).unwrap()
}
