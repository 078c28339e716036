use super::{Milestone, MilestoneId};

/// Static definition of one milestone in the workshop template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneDef {
    pub id: MilestoneId,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The fixed workshop milestone sequence.
pub const MILESTONE_TEMPLATE: [MilestoneDef; 3] = [
    MilestoneDef {
        id: MilestoneId(1),
        title: "Environment Ready",
        subtitle: "Toolchain installed and starter project running",
    },
    MilestoneDef {
        id: MilestoneId(2),
        title: "First Feature",
        subtitle: "Core feature implemented and demoable",
    },
    MilestoneDef {
        id: MilestoneId(3),
        title: "Ship It",
        subtitle: "Polished, deployed, and presented",
    },
];

/// Fresh, uncompleted copy of the template for a new team.
pub fn template() -> Vec<Milestone> {
    MILESTONE_TEMPLATE
        .iter()
        .map(|def| Milestone::new(def.id, def.title, def.subtitle))
        .collect()
}
