//! Static checklist templates.
//!
//! Templates are localizable blueprints: titles and descriptions are
//! localization keys resolved at seed time by a caller-supplied resolver,
//! never stored as keys. The `with_reminder` flag is metadata for the UI
//! (it pre-selects the reminder toggle when the user edits the item);
//! seeded rows always start undone and without a due date.

use crate::model::ChecklistType;

/// One item definition inside a template topic.
#[derive(Debug, Clone, Copy)]
pub struct TemplateItem {
    pub title_key: &'static str,
    /// UI hint only; has no effect on seeded rows.
    pub with_reminder: bool,
}

/// One ordered topic inside a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateTopic {
    pub title_key: &'static str,
    pub items: &'static [TemplateItem],
}

/// A static checklist blueprint.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistTemplate {
    pub kind: ChecklistType,
    pub title_key: &'static str,
    pub description_key: &'static str,
    /// Icon identifier, copied onto the seeded checklist row.
    pub icon: &'static str,
    /// Base color / hex token for the template card.
    pub gradient: &'static str,
    pub topics: &'static [TemplateTopic],
}

impl ChecklistTemplate {
    /// Total number of items across all topics.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.topics.iter().map(|t| t.items.len()).sum()
    }
}

pub const TRAVEL: ChecklistTemplate = ChecklistTemplate {
    kind: ChecklistType::Travel,
    title_key: "screens.home.templates.travel.title",
    description_key: "screens.home.templates.travel.desc",
    icon: "plane",
    gradient: "#3B82F6", // Blue-500
    topics: &[
        TemplateTopic {
            title_key: "screens.home.templates.travel.topics.docs",
            items: &[
                TemplateItem {
                    title_key: "screens.home.templates.travel.items.passport",
                    with_reminder: true,
                },
                TemplateItem {
                    title_key: "screens.home.templates.travel.items.insurance",
                    with_reminder: false,
                },
                TemplateItem {
                    title_key: "screens.home.templates.travel.items.currency",
                    with_reminder: false,
                },
            ],
        },
        TemplateTopic {
            title_key: "screens.home.templates.travel.topics.packing",
            items: &[
                TemplateItem {
                    title_key: "screens.home.templates.travel.items.charger",
                    with_reminder: false,
                },
                TemplateItem {
                    title_key: "screens.home.templates.travel.items.ticket",
                    with_reminder: true,
                },
            ],
        },
    ],
};

pub const MOVING: ChecklistTemplate = ChecklistTemplate {
    kind: ChecklistType::Moving,
    title_key: "screens.home.templates.moving.title",
    description_key: "screens.home.templates.moving.desc",
    icon: "home",
    gradient: "#F59E0B", // Amber-500
    topics: &[
        TemplateTopic {
            title_key: "screens.home.templates.moving.topics.admin",
            items: &[
                TemplateItem {
                    title_key: "screens.home.templates.moving.items.address",
                    with_reminder: true,
                },
                TemplateItem {
                    title_key: "screens.home.templates.moving.items.utilities",
                    with_reminder: true,
                },
            ],
        },
        TemplateTopic {
            title_key: "screens.home.templates.moving.topics.packing",
            items: &[
                TemplateItem {
                    title_key: "screens.home.templates.moving.items.boxes",
                    with_reminder: false,
                },
                TemplateItem {
                    title_key: "screens.home.templates.moving.items.label",
                    with_reminder: false,
                },
            ],
        },
    ],
};

pub const WEDDING: ChecklistTemplate = ChecklistTemplate {
    kind: ChecklistType::Wedding,
    title_key: "screens.home.templates.wedding.title",
    description_key: "screens.home.templates.wedding.desc",
    icon: "heart",
    gradient: "#EC4899", // Pink-500
    topics: &[
        TemplateTopic {
            title_key: "screens.home.templates.wedding.topics.legal",
            items: &[TemplateItem {
                title_key: "screens.home.templates.wedding.items.registry",
                with_reminder: true,
            }],
        },
        TemplateTopic {
            title_key: "screens.home.templates.wedding.topics.vendors",
            items: &[
                TemplateItem {
                    title_key: "screens.home.templates.wedding.items.photo",
                    with_reminder: false,
                },
                TemplateItem {
                    title_key: "screens.home.templates.wedding.items.catering",
                    with_reminder: false,
                },
            ],
        },
    ],
};

/// All templates, in card display order.
pub const TEMPLATES: &[ChecklistTemplate] = &[TRAVEL, MOVING, WEDDING];

/// Look up the template for a checklist type.
///
/// Returns `None` for `Empty` (user-authored) and for types with no
/// blueprint defined (currently `Meeting`).
#[must_use]
pub fn template_for(kind: ChecklistType) -> Option<&'static ChecklistTemplate> {
    TEMPLATES.iter().find(|t| t.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(template_for(ChecklistType::Travel).is_some());
        assert!(template_for(ChecklistType::Moving).is_some());
        assert!(template_for(ChecklistType::Wedding).is_some());
        assert!(template_for(ChecklistType::Empty).is_none());
        assert!(template_for(ChecklistType::Meeting).is_none());
    }

    #[test]
    fn test_travel_shape() {
        let t = template_for(ChecklistType::Travel).unwrap();
        assert_eq!(t.topics.len(), 2);
        assert_eq!(t.topics[0].items.len(), 3);
        assert_eq!(t.topics[1].items.len(), 2);
        assert_eq!(t.item_count(), 5);
    }
}
