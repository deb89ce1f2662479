//! Page Layout - row positions of the landing page sections
//!
//! Everything is measured in terminal rows from the top of the page and
//! derived from the viewport height `H`:
//!
//! ```text
//! hero       0      .. H
//! spacer     H      .. 1.7H
//! about      1.7H   .. 2.7H
//! projects   2.7H   .. (padding, then one item + gap per project)
//! contact    last H rows
//! ```

use folio_core::constants::mask::HERO_END_VIEWPORTS;
use folio_core::{ElementBounds, LandingLayout, Section};

/// Minimum rows for one project item
const MIN_ITEM_HEIGHT: u16 = 8;

/// Top-level blocks of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBlock {
    Hero,
    Spacer,
    About,
    Projects,
    Contact,
}

/// Section and item positions for one viewport height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub viewport: u16,
    pub about_top: u16,
    pub projects_top: u16,
    /// Rows above the first item inside the projects block
    pub projects_padding: u16,
    pub item_tops: Vec<u16>,
    pub item_height: u16,
    pub contact_top: u16,
    pub document: u16,
}

impl PageLayout {
    /// Lay out the page for `viewport` rows and `item_count` projects
    pub fn compute(viewport: u16, item_count: usize) -> Self {
        let h = viewport;
        let about_top = (h as f64 * HERO_END_VIEWPORTS).round() as u16;
        let projects_top = about_top.saturating_add(h);
        let projects_padding = (h / 4).max(1);
        let item_height = (h / 2).max(MIN_ITEM_HEIGHT);
        let gap = h / 2;
        let stride = item_height.saturating_add(gap);

        let first = projects_top.saturating_add(projects_padding);
        let item_tops: Vec<u16> = (0..item_count)
            .map(|i| first.saturating_add(stride.saturating_mul(i as u16)))
            .collect();

        let contact_top = first.saturating_add(stride.saturating_mul(item_count as u16));
        let document = contact_top.saturating_add(h);

        Self {
            viewport,
            about_top,
            projects_top,
            projects_padding,
            item_tops,
            item_height,
            contact_top,
            document,
        }
    }

    /// Row a nav link scrolls to
    pub fn section_top(&self, section: Section) -> u16 {
        match section {
            Section::About => self.about_top,
            Section::Projects => self.projects_top,
            Section::Contact => self.contact_top,
        }
    }

    /// Row that puts item `index` in the middle of the viewport
    pub fn item_focus_row(&self, index: usize) -> Option<u16> {
        let top = *self.item_tops.get(index)?;
        let centered = top as i32 + self.item_height as i32 / 2 - self.viewport as i32 / 2;
        Some(centered.max(0) as u16)
    }

    /// Block containing a page row
    pub fn block_at(&self, row: u16) -> PageBlock {
        if row < self.viewport {
            PageBlock::Hero
        } else if row < self.about_top {
            PageBlock::Spacer
        } else if row < self.projects_top {
            PageBlock::About
        } else if row < self.contact_top {
            PageBlock::Projects
        } else {
            PageBlock::Contact
        }
    }

    /// Element bounds handed to the coordinator
    pub fn to_landing_layout(&self) -> LandingLayout {
        let bounds = |top: u16, height: u16| Some(ElementBounds::new(top as f64, height as f64));
        LandingLayout {
            about: bounds(self.about_top, self.viewport),
            projects_container: bounds(
                self.projects_top,
                self.contact_top.saturating_sub(self.projects_top),
            ),
            items: self
                .item_tops
                .iter()
                .map(|&top| bounds(top, self.item_height))
                .collect(),
        }
    }
}
