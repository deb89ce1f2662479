//! Clickable regions recorded while drawing a frame

use folio_core::Section;
use ratatui::layout::Rect;

use crate::tui::links::ContactLink;

/// Something a mouse click can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLink(Section),
    MenuToggle,
    /// Sidebar node: scroll the item into view
    SidebarNode(usize),
    /// Item body: open the detail page
    OpenProject(usize),
    Contact(ContactLink),
    Back,
    VisitProject,
    ProjectGithub,
}

/// Regions from the last frame; later regions sit on top
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under a screen cell
    pub fn at(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| x >= area.x && x < area.right() && y >= area.y && y < area.bottom())
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}
