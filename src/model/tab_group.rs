//! Tab group - a label bar over a stack of panels
//!
//! The bar and the content stack are kept as two parallel lists so a drag can
//! detach a label while its panel stays put. At rest both lists have the same
//! length and the same current index.

use crate::panel::PanelId;

/// Label-only placeholder shown while a dragged tab hovers this bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempTab {
    pub index: usize,
    previous_current: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TabGroup {
    labels: Vec<String>,
    current_tab: Option<usize>,
    panels: Vec<PanelId>,
    current_panel: Option<usize>,
    /// Selecting a tab also shows its panel unless a drag is in progress
    linked: bool,
    temp_tab: Option<TempTab>,
}

impl TabGroup {
    pub fn new() -> Self {
        Self {
            linked: true,
            ..Self::default()
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// True when there is no content left
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    pub fn tab_text(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn panel(&self, index: usize) -> Option<PanelId> {
        self.panels.get(index).copied()
    }

    pub fn index_of(&self, panel: PanelId) -> Option<usize> {
        self.panels.iter().position(|&p| p == panel)
    }

    pub fn current_tab_index(&self) -> Option<usize> {
        self.current_tab
    }

    pub fn current_panel_index(&self) -> Option<usize> {
        self.current_panel
    }

    pub fn current_panel(&self) -> Option<PanelId> {
        self.current_panel.and_then(|i| self.panel(i))
    }

    pub fn temp_tab(&self) -> Option<TempTab> {
        self.temp_tab
    }

    pub fn is_dragging(&self) -> bool {
        !self.linked
    }

    /// Labels and panels line up and share one selection
    pub fn is_in_sync(&self) -> bool {
        self.temp_tab.is_none()
            && self.labels.len() == self.panels.len()
            && self.current_tab == self.current_panel
    }

    // ========================================================================
    // Tabs (label + panel)
    // ========================================================================

    pub fn add_tab(&mut self, panel: PanelId, label: impl Into<String>) -> usize {
        self.insert_tab(None, panel, label)
    }

    /// Insert a label and its panel together; `None` or an index past the end appends.
    ///
    /// Returns the actual index. The first tab of an empty group becomes current.
    pub fn insert_tab(
        &mut self,
        index: Option<usize>,
        panel: PanelId,
        label: impl Into<String>,
    ) -> usize {
        let label_index = index.unwrap_or(self.labels.len()).min(self.labels.len());
        self.labels.insert(label_index, label.into());
        self.current_tab = Some(shift_on_insert(self.current_tab, label_index).unwrap_or(0));

        let panel_index = index.unwrap_or(self.panels.len()).min(self.panels.len());
        self.insert_only_widget(panel_index, panel);
        label_index
    }

    /// Remove a label and its panel at `index`
    pub fn remove_tab_and_widget(&mut self, index: usize) -> Option<PanelId> {
        let panel = self.panel(index)?;
        self.remove_only_tab(index);
        self.remove_only_widget(panel);
        Some(panel)
    }

    // ========================================================================
    // Independent label / content edits
    // ========================================================================

    /// Remove only the label at `index`, leaving the panel in the stack
    pub fn remove_only_tab(&mut self, index: usize) -> Option<String> {
        if index >= self.labels.len() {
            return None;
        }
        let label = self.labels.remove(index);
        self.current_tab = shift_on_remove(self.current_tab, index, self.labels.len());
        Some(label)
    }

    /// Remove only `panel` from the content stack, returning its former index
    pub fn remove_only_widget(&mut self, panel: PanelId) -> Option<usize> {
        let index = self.index_of(panel)?;
        self.panels.remove(index);
        self.current_panel = shift_on_remove(self.current_panel, index, self.panels.len());
        Some(index)
    }

    /// Put `panel` back into the content stack without a label
    pub fn insert_only_widget(&mut self, index: usize, panel: PanelId) -> usize {
        let index = index.min(self.panels.len());
        self.panels.insert(index, panel);
        self.current_panel = Some(shift_on_insert(self.current_panel, index).unwrap_or(0));
        index
    }

    /// Put a label back without touching the content stack
    pub fn insert_only_tab(&mut self, index: usize, label: impl Into<String>) -> usize {
        let index = index.min(self.labels.len());
        self.labels.insert(index, label.into());
        self.current_tab = Some(shift_on_insert(self.current_tab, index).unwrap_or(0));
        index
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a label; while linked this also shows the matching panel
    pub fn set_current_tab_index(&mut self, index: usize) {
        if index >= self.labels.len() {
            return;
        }
        self.current_tab = Some(index);
        if self.linked && index < self.panels.len() {
            self.current_panel = Some(index);
        }
    }

    pub fn set_current_panel_index(&mut self, index: usize) {
        if index < self.panels.len() {
            self.current_panel = Some(index);
        }
    }

    /// Select both the label and the panel at `index`
    pub fn select(&mut self, index: usize) {
        if index < self.labels.len() {
            self.current_tab = Some(index);
        }
        self.set_current_panel_index(index);
    }

    // ========================================================================
    // Drag preview
    // ========================================================================

    /// Suspend the selection-to-content linkage for the duration of a drag
    pub fn begin_dragging(&mut self) {
        self.linked = false;
    }

    /// Resume linkage and bring the bar back in line with the content
    pub fn end_dragging(&mut self) {
        self.remove_temp_tab();
        self.linked = true;
        if self.labels.len() == self.panels.len() {
            self.current_tab = self.current_panel;
        }
    }

    /// Insert a placeholder label and select it; `None` appends.
    ///
    /// An existing temp tab is moved instead of duplicated.
    pub fn add_temp_tab(&mut self, index: Option<usize>, label: impl Into<String>) -> usize {
        if self.temp_tab.is_some() {
            return self.move_temp_tab(index);
        }
        let previous_current = self.current_tab;
        let index = index.unwrap_or(self.labels.len()).min(self.labels.len());
        self.labels.insert(index, label.into());
        self.current_tab = Some(index);
        self.temp_tab = Some(TempTab {
            index,
            previous_current,
        });
        index
    }

    /// Reposition the placeholder under the pointer
    pub fn move_temp_tab(&mut self, index: Option<usize>) -> usize {
        let Some(temp) = self.temp_tab else {
            return 0;
        };
        let label = self.labels.remove(temp.index);
        let index = index.unwrap_or(self.labels.len()).min(self.labels.len());
        self.labels.insert(index, label);
        self.current_tab = Some(index);
        self.temp_tab = Some(TempTab { index, ..temp });
        index
    }

    /// Drop the placeholder and restore the selection it displaced
    pub fn remove_temp_tab(&mut self) -> bool {
        let Some(temp) = self.temp_tab.take() else {
            return false;
        };
        self.labels.remove(temp.index);
        self.current_tab = match temp.previous_current {
            Some(i) if i < self.labels.len() => Some(i),
            _ if self.labels.is_empty() => None,
            _ => Some(self.labels.len() - 1),
        };
        true
    }
}

fn shift_on_insert(current: Option<usize>, inserted: usize) -> Option<usize> {
    current.map(|c| if c >= inserted { c + 1 } else { c })
}

/// Selection after removing `removed`; the right neighbour takes over a removed current
fn shift_on_remove(current: Option<usize>, removed: usize, remaining: usize) -> Option<usize> {
    let c = current?;
    if remaining == 0 {
        return None;
    }
    if c > removed {
        Some(c - 1)
    } else {
        Some(c.min(remaining - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with(n: u64) -> TabGroup {
        let mut g = TabGroup::new();
        for i in 0..n {
            g.add_tab(PanelId(i), format!("tab {}", i));
        }
        g
    }

    #[test]
    fn test_first_tab_becomes_current() {
        let g = group_with(1);
        assert_eq!(g.current_tab_index(), Some(0));
        assert_eq!(g.current_panel(), Some(PanelId(0)));
    }

    #[test]
    fn test_temp_tab_restores_selection() {
        let mut g = group_with(3);
        g.select(1);
        g.begin_dragging();
        g.add_temp_tab(Some(0), "ghost");
        assert_eq!(g.current_tab_index(), Some(0));
        assert_eq!(g.current_panel_index(), Some(1));
        g.move_temp_tab(Some(3));
        assert_eq!(g.tab_text(3), Some("ghost"));
        assert!(g.remove_temp_tab());
        assert_eq!(g.current_tab_index(), Some(1));
        g.end_dragging();
        assert!(g.is_in_sync());
    }

    #[test]
    fn test_remove_current_selects_right_neighbour() {
        let mut g = group_with(3);
        g.select(1);
        g.remove_tab_and_widget(1);
        assert_eq!(g.current_tab_index(), Some(1));
        assert_eq!(g.current_panel(), Some(PanelId(2)));
    }
}
