//! Layout plans
//!
//! A [`LayoutPlan`] is an ordered list of grid positions the renderer uses to
//! arrange children. Items are numbered from 1 in the order the caller
//! supplies them.

use crate::breakpoints::FormFactor;
use serde::Serialize;
use smallvec::SmallVec;

/// What occupies a grid cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementContent {
    /// Fixed TV menu entry
    Menu(String),
    /// Caller's item, 1-based
    Item(usize),
}

/// One grid cell assignment
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub content: PlacementContent,
}

impl Placement {
    fn item(row: usize, column: usize, index: usize) -> Self {
        Self {
            row,
            column,
            content: PlacementContent::Item(index),
        }
    }
}

/// Arrangement of items for one form factor
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    pub form_factor: FormFactor,
    /// Column count of the item grid
    pub columns: usize,
    pub placements: Vec<Placement>,
}

impl LayoutPlan {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Number of rows used, including the TV menu row
    pub fn rows(&self) -> usize {
        self.placements.iter().map(|p| p.row + 1).max().unwrap_or(0)
    }

    /// Items in one column, top to bottom
    pub fn column_items(&self, column: usize) -> Vec<usize> {
        let mut cells: Vec<(usize, usize)> = self
            .placements
            .iter()
            .filter(|p| p.column == column)
            .filter_map(|p| match p.content {
                PlacementContent::Item(index) => Some((p.row, index)),
                PlacementContent::Menu(_) => None,
            })
            .collect();
        cells.sort_unstable();
        cells.into_iter().map(|(_, index)| index).collect()
    }

    /// Items in one row, left to right
    pub fn row_items(&self, row: usize) -> Vec<usize> {
        let mut cells: Vec<(usize, usize)> = self
            .placements
            .iter()
            .filter(|p| p.row == row)
            .filter_map(|p| match p.content {
                PlacementContent::Item(index) => Some((p.column, index)),
                PlacementContent::Menu(_) => None,
            })
            .collect();
        cells.sort_unstable();
        cells.into_iter().map(|(_, index)| index).collect()
    }

    /// TV menu labels in display order; empty for other form factors
    pub fn menu_labels(&self) -> Vec<&str> {
        self.placements
            .iter()
            .filter_map(|p| match &p.content {
                PlacementContent::Menu(label) => Some(label.as_str()),
                PlacementContent::Item(_) => None,
            })
            .collect()
    }

    /// Grid position of an item
    pub fn position_of(&self, item: usize) -> Option<(usize, usize)> {
        self.placements
            .iter()
            .find(|p| p.content == PlacementContent::Item(item))
            .map(|p| (p.row, p.column))
    }
}

/// Fixed entries shown above the TV grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TvMenu {
    labels: SmallVec<[String; 4]>,
}

impl TvMenu {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for TvMenu {
    fn default() -> Self {
        Self::new(["Home", "Search", "Library", "Settings"])
    }
}

/// Produces layout plans; holds the TV menu configuration
#[derive(Clone, Debug, Default)]
pub struct LayoutPlanner {
    menu: TvMenu,
}

impl LayoutPlanner {
    pub fn new(menu: TvMenu) -> Self {
        Self { menu }
    }

    pub fn menu(&self) -> &TvMenu {
        &self.menu
    }

    /// Arrange `item_count` items for a form factor
    pub fn plan(&self, form_factor: FormFactor, item_count: usize) -> LayoutPlan {
        let columns = form_factor.columns();
        let placements: Vec<Placement> = match form_factor {
            FormFactor::Mobile => (1..=item_count)
                .map(|index| Placement::item(index - 1, 0, index))
                .collect(),
            FormFactor::Tablet => {
                // Left column takes the extra item when the count is odd
                let left = item_count.div_ceil(2);
                (1..=item_count)
                    .map(|index| {
                        if index <= left {
                            Placement::item(index - 1, 0, index)
                        } else {
                            Placement::item(index - 1 - left, 1, index)
                        }
                    })
                    .collect()
            }
            FormFactor::Tv => {
                let menu = self
                    .menu
                    .labels()
                    .iter()
                    .enumerate()
                    .map(|(column, label)| Placement {
                        row: 0,
                        column,
                        content: PlacementContent::Menu(label.clone()),
                    });
                let grid = (1..=item_count).map(|index| {
                    let offset = index - 1;
                    Placement::item(1 + offset / columns, offset % columns, index)
                });
                menu.chain(grid).collect()
            }
        };

        tracing::trace!(%form_factor, item_count, columns, "planned layout");

        LayoutPlan {
            form_factor,
            columns,
            placements,
        }
    }
}

/// Arrange items with the default TV menu
pub fn resolve_layout(form_factor: FormFactor, item_count: usize) -> LayoutPlan {
    LayoutPlanner::default().plan(form_factor, item_count)
}
