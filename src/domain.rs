/// Maximum number of creatures that can be compared at once.
pub const MAX_COMPARE: usize = 6;

/// Fixed scale for every radar axis. Base stats top out at 255.
pub const STAT_AXIS_MAX: f64 = 255.0;

/// The six canonical radar axes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAxis {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatAxis {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// The stat name as it appears in API payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "special-attack" => Some(Self::SpecialAttack),
            "special-defense" => Some(Self::SpecialDefense),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Atk",
            Self::Defense => "Def",
            Self::SpecialAttack => "SpA",
            Self::SpecialDefense => "SpD",
            Self::Speed => "Spe",
        }
    }
}

/// One selectable creature from the catalog. Built once at startup and
/// immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based, assigned in catalog response order.
    pub id: u32,
    pub name: String,
    pub detail_url: String,
}

impl CatalogEntry {
    pub fn new(id: u32, name: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            detail_url: detail_url.into(),
        }
    }
}

/// The six base stats of one creature, fetched per render and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeVector {
    pub entity_name: String,
    /// Always holds one value per axis, in canonical axis order.
    pub stats: Vec<(StatAxis, u32)>,
}

impl AttributeVector {
    pub fn value(&self, axis: StatAxis) -> u32 {
        self.stats
            .iter()
            .find(|(stat_axis, _)| *stat_axis == axis)
            .map_or(0, |(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_order_is_canonical() {
        let names: Vec<&str> = StatAxis::ALL.iter().map(|axis| axis.as_str()).collect();
        assert_eq!(
            names,
            [
                "hp",
                "attack",
                "defense",
                "special-attack",
                "special-defense",
                "speed"
            ]
        );
    }

    #[test]
    fn parse_round_trips_every_axis() {
        for axis in StatAxis::ALL {
            assert_eq!(StatAxis::parse(axis.as_str()), Some(axis));
        }
        assert_eq!(StatAxis::parse("evasion"), None);
    }

    #[test]
    fn attribute_vector_lookup_defaults_to_zero() {
        let vector = AttributeVector {
            entity_name: "bulbasaur".to_string(),
            stats: vec![(StatAxis::Hp, 45), (StatAxis::Speed, 45)],
        };
        assert_eq!(vector.value(StatAxis::Hp), 45);
        assert_eq!(vector.value(StatAxis::Attack), 0);
    }
}
