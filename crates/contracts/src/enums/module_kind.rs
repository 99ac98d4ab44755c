use serde::{Deserialize, Serialize};

/// Top-level shopping domain the session is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Travel,
    Food,
    Tickets,
    Shopping,
    Wallet,
    #[default]
    None,
}

impl ModuleKind {
    pub fn code(&self) -> &'static str {
        match self {
            ModuleKind::Travel => "travel",
            ModuleKind::Food => "food",
            ModuleKind::Tickets => "tickets",
            ModuleKind::Shopping => "shopping",
            ModuleKind::Wallet => "wallet",
            ModuleKind::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleKind::Travel => "Travel",
            ModuleKind::Food => "Food",
            ModuleKind::Tickets => "Tickets",
            ModuleKind::Shopping => "Shopping",
            ModuleKind::Wallet => "Wallet",
            ModuleKind::None => "Home",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "travel" => Some(ModuleKind::Travel),
            "food" => Some(ModuleKind::Food),
            "tickets" => Some(ModuleKind::Tickets),
            "shopping" => Some(ModuleKind::Shopping),
            "wallet" => Some(ModuleKind::Wallet),
            "none" => Some(ModuleKind::None),
            _ => None,
        }
    }

    /// Modules reachable from the main navigation bar
    pub fn all() -> [ModuleKind; 5] {
        [
            ModuleKind::Travel,
            ModuleKind::Food,
            ModuleKind::Tickets,
            ModuleKind::Shopping,
            ModuleKind::Wallet,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for module in ModuleKind::all() {
            assert_eq!(ModuleKind::from_code(module.code()), Some(module));
        }
        assert_eq!(ModuleKind::from_code("wallet"), Some(ModuleKind::Wallet));
        assert_eq!(ModuleKind::from_code("bank"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ModuleKind::Tickets).unwrap();
        assert_eq!(json, "\"tickets\"");
        let parsed: ModuleKind = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, ModuleKind::None);
    }
}
