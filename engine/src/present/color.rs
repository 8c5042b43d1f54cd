//! Track colors.
//!
//! Both policies are pure functions of what they are given, never of any map iteration order.
//!

/// 40 distinct colors, reused cyclically.
pub const PALETTE: [&str; 40] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#A133FF", "#33FFF5", "#F5FF33", "#FF8C33",
    "#8C33FF", "#33FF8C", "#FF3333", "#33FF33", "#3333FF", "#FF33FF", "#33FFFF", "#FFFF33",
    "#FF6633", "#6633FF", "#33FF66", "#FF3366", "#66FF33", "#3366FF", "#FF9933", "#9933FF",
    "#33FF99", "#FF3399", "#99FF33", "#3399FF", "#FFCC33", "#CC33FF", "#33FFCC", "#FF33CC",
    "#CCFF33", "#33CCFF", "#C70039", "#900C3F", "#581845", "#1ABC9C", "#2E86C1", "#F39C12",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColorPolicy {
    /// `PALETTE[index % len]`, index being the position in the selection
    #[default]
    Palette,
    /// Listed vessels get `highlight`, everyone else `default`
    Highlight {
        vessels: Vec<String>,
        highlight: String,
        default: String,
    },
}

impl ColorPolicy {
    /// Highlight policy with the usual red/blue couple.
    ///
    pub fn highlight(vessels: &[&str]) -> Self {
        ColorPolicy::Highlight {
            vessels: vessels.iter().map(|v| v.to_string()).collect(),
            highlight: "red".to_string(),
            default: "blue".to_string(),
        }
    }

    pub fn color(&self, index: usize, vessel_id: &str) -> String {
        match self {
            ColorPolicy::Palette => PALETTE[index % PALETTE.len()].to_string(),
            ColorPolicy::Highlight {
                vessels,
                highlight,
                default,
            } => {
                if vessels.iter().any(|v| v == vessel_id) {
                    highlight.clone()
                } else {
                    default.clone()
                }
            }
        }
    }
}
