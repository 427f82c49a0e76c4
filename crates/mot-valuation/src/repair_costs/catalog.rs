use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Static cost bucket for a family of defects.
#[derive(Debug)]
pub(crate) struct CategorySpec {
    pub(crate) key: &'static str,
    pub(crate) patterns: &'static [&'static str],
    pub(crate) min_cost: u32,
    pub(crate) max_cost: u32,
    pub(crate) average_cost: u32,
    pub(crate) description: &'static str,
}

// Matching is first-match-wins, so this order decides overlapping texts
// (e.g. "brake disc excessively rusted" is a brake repair, not bodywork).
pub(crate) static CATEGORY_SPECS: [CategorySpec; 15] = [
    CategorySpec {
        key: "brake",
        patterns: &[
            r"brake.*pad",
            r"brake.*disc",
            r"brake.*worn",
            r"brake.*efficiency",
            r"handbrake",
            r"parking brake",
        ],
        min_cost: 80,
        max_cost: 400,
        average_cost: 180,
        description: "Brake pads/discs replacement",
    },
    CategorySpec {
        key: "tyre",
        patterns: &[
            r"tyre.*tread",
            r"tyre.*worn",
            r"tyre.*damaged",
            r"tyre.*illegal",
            r"tire",
        ],
        min_cost: 50,
        max_cost: 200,
        average_cost: 100,
        description: "Tyre replacement (per tyre)",
    },
    CategorySpec {
        key: "suspension",
        patterns: &[
            r"suspension",
            r"shock absorber",
            r"spring.*worn",
            r"bush.*worn",
        ],
        min_cost: 150,
        max_cost: 600,
        average_cost: 350,
        description: "Suspension component replacement",
    },
    CategorySpec {
        key: "lights",
        patterns: &[
            r"headlamp",
            r"headlight",
            r"light.*not.*work",
            r"bulb",
            r"lamp.*inoperative",
            r"indicator",
        ],
        min_cost: 10,
        max_cost: 150,
        average_cost: 40,
        description: "Light/bulb replacement",
    },
    CategorySpec {
        key: "exhaust",
        patterns: &[
            r"exhaust.*leak",
            r"exhaust.*excessive",
            r"exhaust.*insecure",
            r"silencer",
        ],
        min_cost: 80,
        max_cost: 800,
        average_cost: 250,
        description: "Exhaust system repair/replacement",
    },
    CategorySpec {
        key: "steering",
        patterns: &[
            r"steering.*play",
            r"steering.*loose",
            r"track rod",
            r"steering.*worn",
        ],
        min_cost: 100,
        max_cost: 500,
        average_cost: 250,
        description: "Steering component repair",
    },
    CategorySpec {
        key: "windscreen",
        patterns: &[
            r"windscreen.*damaged",
            r"wiper.*inoperative",
            r"wiper.*blade",
            r"windscreen.*washer",
        ],
        min_cost: 15,
        max_cost: 300,
        average_cost: 50,
        description: "Windscreen/wiper repair",
    },
    CategorySpec {
        key: "emissions",
        patterns: &[
            r"emission.*excessive",
            r"emission.*control",
            r"lambda",
            r"catalytic converter",
        ],
        min_cost: 100,
        max_cost: 1500,
        average_cost: 400,
        description: "Emissions system repair",
    },
    CategorySpec {
        key: "body",
        patterns: &[
            r"body.*corrosion",
            r"chassis.*corrosion",
            r"rust",
            r"structure.*corrosion",
            r"sill.*corroded",
        ],
        min_cost: 200,
        max_cost: 2000,
        average_cost: 800,
        description: "Bodywork/corrosion repair",
    },
    CategorySpec {
        key: "mirrors",
        patterns: &[r"mirror.*missing", r"mirror.*insecure", r"mirror.*damaged"],
        min_cost: 20,
        max_cost: 150,
        average_cost: 60,
        description: "Mirror replacement",
    },
    CategorySpec {
        key: "seatbelts",
        patterns: &[r"seat belt", r"seatbelt", r"restraint"],
        min_cost: 50,
        max_cost: 300,
        average_cost: 120,
        description: "Seatbelt repair/replacement",
    },
    CategorySpec {
        key: "registration_plate",
        patterns: &[r"registration plate", r"number plate"],
        min_cost: 15,
        max_cost: 50,
        average_cost: 25,
        description: "Registration plate replacement",
    },
    CategorySpec {
        key: "oil_leak",
        patterns: &[r"oil.*leak", r"fluid.*leak"],
        min_cost: 50,
        max_cost: 500,
        average_cost: 200,
        description: "Oil/fluid leak repair",
    },
    CategorySpec {
        key: "horn",
        patterns: &[r"horn.*inoperative", r"horn.*not.*work"],
        min_cost: 20,
        max_cost: 80,
        average_cost: 40,
        description: "Horn repair",
    },
    CategorySpec {
        key: "doors",
        patterns: &[r"door.*insecure", r"door.*not.*close"],
        min_cost: 50,
        max_cost: 300,
        average_cost: 150,
        description: "Door mechanism repair",
    },
];

pub(crate) static UNKNOWN_CATEGORY: CategorySpec = CategorySpec {
    key: "unknown",
    patterns: &[],
    min_cost: 50,
    max_cost: 500,
    average_cost: 200,
    description: "General repair",
};

pub(crate) struct CompiledCategory {
    pub(crate) spec: &'static CategorySpec,
    matcher: Regex,
}

impl CompiledCategory {
    fn compile(spec: &'static CategorySpec) -> Self {
        let alternation = spec
            .patterns
            .iter()
            .map(|pattern| format!("(?:{pattern})"))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            spec,
            matcher: Regex::new(&alternation).expect("repair cost pattern compiles"),
        }
    }

    pub(crate) fn matches(&self, lowered: &str) -> bool {
        self.matcher.is_match(lowered)
    }
}

/// Catalog compiled once and shared read-only for the life of the process.
pub(crate) static CATALOG: LazyLock<Vec<CompiledCategory>> =
    LazyLock::new(|| CATEGORY_SPECS.iter().map(CompiledCategory::compile).collect());

/// Public reference row for the repair-cost table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub category: &'static str,
    pub min_cost: u32,
    pub max_cost: u32,
    pub average_cost: u32,
    pub description: &'static str,
}

impl CategorySpec {
    pub(crate) fn to_view(&self) -> CategoryView {
        CategoryView {
            category: self.key,
            min_cost: self.min_cost,
            max_cost: self.max_cost,
            average_cost: self.average_cost,
            description: self.description,
        }
    }
}
