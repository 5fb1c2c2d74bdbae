//! Product and machine code tables for the Taxas export.
//!
//! Unknown inputs never fail: they map to [`OTHER_CODE`] so one odd entry
//! does not block the whole claim.

use crate::core::FuelType;

/// Fallback code for unrecognized fuel or machine types.
pub const OTHER_CODE: &str = "OTHER";

/// Swiss customs tariff number of a fuel type.
pub fn map_fuel_type_to_product_code(fuel_type: FuelType) -> &'static str {
    match fuel_type {
        FuelType::Diesel => "2710.1911",
        FuelType::Gasoline => "2710.1211",
        FuelType::Biodiesel => "3826.0010",
    }
}

/// Tariff number for a raw fuel type name, or [`OTHER_CODE`].
pub fn map_raw_fuel_type_to_product_code(raw: &str) -> &'static str {
    FuelType::parse(raw)
        .map(map_fuel_type_to_product_code)
        .unwrap_or(OTHER_CODE)
}

/// Machine codes and the names (FR/DE/EN) that map to them.
const MACHINE_CODES: &[(&str, &[&str])] = &[
    (
        "EXC",
        &[
            "excavator",
            "mini_excavator",
            "pelle",
            "pelle_hydraulique",
            "pelleteuse",
            "mini_pelle",
            "bagger",
            "minibagger",
        ],
    ),
    (
        "LDR",
        &["loader", "wheel_loader", "chargeuse", "chargeuse_sur_pneus", "radlader", "lader"],
    ),
    ("DOZ", &["bulldozer", "dozer", "planierraupe"]),
    ("CRN", &["crane", "mobile_crane", "grue", "grue_mobile", "kran", "mobilkran"]),
    ("DMP", &["dumper", "tombereau", "muldenkipper"]),
    (
        "CMP",
        &["compactor", "roller", "road_roller", "compacteur", "rouleau", "walze"],
    ),
    ("GRD", &["grader", "niveleuse"]),
    (
        "TLH",
        &["telehandler", "telescopic_handler", "chariot_telescopique", "teleskoplader"],
    ),
    ("FLT", &["forklift", "chariot_elevateur", "gabelstapler", "stapler"]),
    (
        "GEN",
        &["generator", "groupe_electrogene", "generateur", "stromaggregat"],
    ),
    ("TRC", &["tractor", "tracteur", "traktor"]),
    (
        "HRV",
        &[
            "harvester",
            "combine",
            "combine_harvester",
            "moissonneuse",
            "moissonneuse_batteuse",
            "mahdrescher",
        ],
    ),
    ("MOW", &["mower", "faucheuse", "motofaucheuse", "motormaher"]),
];

/// Export code for a free-text machine type, or [`OTHER_CODE`].
///
/// Matching ignores case, common accents, and the difference between
/// spaces, hyphens and underscores. A known code (e.g. `"EXC"`) maps to
/// itself.
pub fn map_machine_type_to_code(machine_type: &str) -> &'static str {
    let key = normalize(machine_type);
    if key.is_empty() {
        return OTHER_CODE;
    }
    MACHINE_CODES
        .iter()
        .find(|(code, names)| code.eq_ignore_ascii_case(&key) || names.contains(&key.as_str()))
        .map(|(code, _)| *code)
        .unwrap_or(OTHER_CODE)
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '-' => '_',
            c => c,
        })
        .collect()
}
