//! Gallery filtering: which items a filter value keeps and the style steps
//! that move an item in or out of the layout.

use std::collections::BTreeSet;

use crate::config::FilterConfig;

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    All,
    Tag(String),
}

impl FilterValue {
    /// Parses a button's `data-filter`. Missing or blank values select everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => FilterValue::All,
            Some(tag) => FilterValue::Tag(tag.to_string()),
        }
    }

    pub fn matches(&self, tags: &TagSet) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Tag(tag) => tags.contains(tag),
        }
    }
}

/// Category labels of one gallery item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn parse(raw: &str) -> Self {
        TagSet(raw.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inline style properties to write on an item. `None` leaves a property alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleStep {
    pub display: Option<&'static str>,
    pub opacity: Option<&'static str>,
    pub transform: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// An immediate style change followed by a deferred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub visibility: Visibility,
    pub immediate: StyleStep,
    pub deferred: StyleStep,
    pub delay_ms: u32,
}

impl Transition {
    pub fn show(settle_ms: u32) -> Self {
        Self {
            visibility: Visibility::Shown,
            immediate: StyleStep {
                display: Some("block"),
                ..StyleStep::default()
            },
            deferred: StyleStep {
                opacity: Some("1"),
                transform: Some("scale(1)"),
                ..StyleStep::default()
            },
            delay_ms: settle_ms,
        }
    }

    pub fn hide(delay_ms: u32) -> Self {
        Self {
            visibility: Visibility::Hidden,
            immediate: StyleStep {
                opacity: Some("0"),
                transform: Some("scale(0.8)"),
                ..StyleStep::default()
            },
            deferred: StyleStep {
                display: Some("none"),
                ..StyleStep::default()
            },
            delay_ms,
        }
    }
}

/// Filter buttons and gallery items as they were found at mount time.
#[derive(Debug, Clone)]
pub struct FilterBoard {
    buttons: Vec<FilterValue>,
    items: Vec<TagSet>,
    active: usize,
    show_settle_ms: u32,
    hide_delay_ms: u32,
}

impl FilterBoard {
    pub fn new(buttons: Vec<FilterValue>, items: Vec<TagSet>, config: &FilterConfig) -> Self {
        Self {
            buttons,
            items,
            active: 0,
            show_settle_ms: config.show_settle_ms,
            hide_delay_ms: config.hide_delay_ms,
        }
    }

    /// Marks `index` as the selected button without touching the items.
    pub fn with_active(mut self, index: usize) -> Self {
        if index < self.buttons.len() {
            self.active = index;
        }
        self
    }

    pub fn active(&self) -> Option<usize> {
        (!self.buttons.is_empty()).then_some(self.active)
    }

    pub fn active_value(&self) -> FilterValue {
        self.buttons
            .get(self.active)
            .cloned()
            .unwrap_or(FilterValue::All)
    }

    /// Selects button `index` and returns one transition per item, in item order.
    /// Returns `None` for an index with no button.
    pub fn activate(&mut self, index: usize) -> Option<Vec<Transition>> {
        let value = self.buttons.get(index)?.clone();
        self.active = index;
        log::debug!("filter activated: {value:?}");
        Some(self.plan(&value))
    }

    pub fn plan(&self, value: &FilterValue) -> Vec<Transition> {
        self.items
            .iter()
            .map(|tags| {
                if value.matches(tags) {
                    Transition::show(self.show_settle_ms)
                } else {
                    Transition::hide(self.hide_delay_ms)
                }
            })
            .collect()
    }
}
