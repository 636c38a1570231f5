use serde::{Deserialize, Serialize};

/// The five elements (五行).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// 相生: wood → fire → earth → metal → water → wood.
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// 相剋: wood → earth → water → fire → metal → wood.
    pub fn restrains(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn kanji(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }

    /// Relation of `self` (the base) towards `other`.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.restrains() == other {
            ElementRelation::Restrains
        } else {
            ElementRelation::RestrainedBy
        }
    }
}

/// Directed five-element relation between a base element and another.
///
/// Any two distinct elements are related by exactly one of the generating
/// or restraining cycles in one direction, so the relation is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Same,
    Generates,
    GeneratedBy,
    Restrains,
    RestrainedBy,
}

impl ElementRelation {
    /// The same relation seen from the other side.
    pub fn reversed(self) -> ElementRelation {
        match self {
            ElementRelation::Same => ElementRelation::Same,
            ElementRelation::Generates => ElementRelation::GeneratedBy,
            ElementRelation::GeneratedBy => ElementRelation::Generates,
            ElementRelation::Restrains => ElementRelation::RestrainedBy,
            ElementRelation::RestrainedBy => ElementRelation::Restrains,
        }
    }
}
