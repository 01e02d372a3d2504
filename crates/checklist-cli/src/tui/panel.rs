//! To-do panel: a [`Checklist`] wired to keys and drawn with ratatui.
//!
//! Rows are shown as the unchecked group followed by the checked group. The
//! panel keeps no row index of its own: the cursor lives in the checklist,
//! and the highlighted row is found by identity with
//! [`Checklist::index_by_item`].
//!
//! Key bindings: j/k or arrows move, g/G jump, space/enter toggle, a add,
//! d delete, s sort, esc unselect, q quit.

use checklist_core::{Checklist, ItemRef, same_item};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::debug;

/// Whether keys drive navigation or edit the new-item draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Adding,
}

#[derive(Debug)]
pub struct TodoPanel {
    title: String,
    list: Checklist,
    input_mode: InputMode,
    draft: String,
    status_msg: Option<String>,
    /// First visible row; carried between frames so scrolling is stable.
    scroll_offset: usize,
    should_quit: bool,
}

impl TodoPanel {
    #[must_use]
    pub fn new(title: impl Into<String>, list: Checklist) -> Self {
        Self {
            title: title.into(),
            list,
            input_mode: InputMode::Normal,
            draft: String::new(),
            status_msg: None,
            scroll_offset: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn checklist(&self) -> &Checklist {
        &self.list
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status_msg.as_deref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_msg = Some(msg.into());
    }

    // -----------------------------------------------------------------------
    // Rows
    // -----------------------------------------------------------------------

    /// Items in display order: unchecked first, then checked.
    #[must_use]
    pub fn rows(&self) -> Vec<ItemRef> {
        let mut rows = self.list.unchecked_items();
        rows.extend(self.list.checked_items());
        rows
    }

    /// Display row of the selected item, if the cursor is valid.
    fn cursor_row(&self, rows: &[ItemRef]) -> Option<usize> {
        if self.list.is_unselectable() {
            return None;
        }
        let selected = self.list.selected_item()?;
        rows.iter().position(|row| same_item(row, selected))
    }

    /// Point the checklist cursor at `item`, or clear it if `item` is gone.
    fn anchor_on(&mut self, item: &ItemRef) {
        match self.list.index_by_item(item) {
            Some(index) => self.list.select(index),
            None => self.list.unselect(),
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    fn select_row(&mut self, row_of: impl FnOnce(Option<usize>, usize) -> usize) {
        let rows = self.rows();
        if rows.is_empty() {
            return;
        }
        let row = row_of(self.cursor_row(&rows), rows.len()).min(rows.len() - 1);
        self.anchor_on(&rows[row]);
    }

    pub fn select_next(&mut self) {
        self.select_row(|current, len| current.map_or(0, |r| (r + 1).min(len - 1)));
    }

    pub fn select_prev(&mut self) {
        self.select_row(|current, _| current.map_or(0, |r| r.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        self.select_row(|_, _| 0);
    }

    pub fn select_last(&mut self) {
        self.select_row(|_, len| len - 1);
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Flip the selected item. It changes group but stays selected, since the
    /// checklist cursor indexes list order, not display order.
    pub fn toggle_selected(&mut self) {
        let Some(item) = self.list.selected_item().cloned() else {
            return;
        };
        let checked = item.toggle();
        debug!(checked, "item toggled");
        self.set_status(if checked {
            format!("Checked: {}", item.text())
        } else {
            format!("Unchecked: {}", item.text())
        });
    }

    pub fn delete_selected(&mut self) {
        if self.list.is_unselectable() {
            return;
        }
        let Some(index) = self.list.selected() else {
            return;
        };
        let removed = self.list.delete(index);
        self.list.unselect();
        self.set_status(format!("Deleted: {}", removed.text()));
    }

    /// Add a new unchecked item and select it.
    pub fn add_item(&mut self, text: &str) {
        let item = self.list.add(false, text);
        self.anchor_on(&item);
        self.set_status(format!("Added: {text}"));
    }

    /// Sort by text and keep the cursor on the item it named before.
    pub fn sort_items(&mut self) {
        let anchor = self.list.selected_item().cloned();
        self.list.sort();
        if let Some(item) = anchor {
            self.anchor_on(&item);
        }
        self.set_status("Sorted");
    }

    // -----------------------------------------------------------------------
    // Key event handling
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Adding => self.handle_adding_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),

            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('s') => self.sort_items(),
            KeyCode::Char('a') => {
                self.draft.clear();
                self.input_mode = InputMode::Adding;
            }
            KeyCode::Esc => {
                self.list.unselect();
                self.status_msg = None;
            }
            _ => {}
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent) {
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.draft.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let text = self.draft.trim().to_string();
                self.draft.clear();
                self.input_mode = InputMode::Normal;
                if !text.is_empty() {
                    self.add_item(&text);
                }
            }
            KeyCode::Backspace => {
                self.draft.pop();
            }
            KeyCode::Char(c) if !chord => self.draft.push(c),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        self.render_list(frame, chunks[0]);
        frame.render_widget(Paragraph::new(self.status_line()), chunks[1]);
    }

    fn render_list(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let rows = self.rows();
        let done = self.list.checked_items().len();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({done}/{}) ", self.title, self.list.len()));

        if rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "Nothing to do. Press a to add an item.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = self.list.longest_line();
        let items: Vec<ListItem<'static>> = rows.iter().map(|item| build_row(item, width)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default()
            .with_offset(self.scroll_offset)
            .with_selected(self.cursor_row(&rows));
        frame.render_stateful_widget(list, area, &mut state);
        self.scroll_offset = state.offset();
    }

    fn status_line(&self) -> Line<'static> {
        match self.input_mode() {
            InputMode::Adding => Line::from(vec![
                Span::styled("New item: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}_", self.draft)),
            ]),
            InputMode::Normal => match self.status() {
                Some(msg) => Line::from(Span::raw(msg.to_string())),
                None => Line::from(Span::styled(
                    "j/k move  space toggle  a add  d delete  s sort  q quit",
                    Style::default().fg(Color::DarkGray),
                )),
            },
        }
    }
}

fn build_row(item: &ItemRef, width: usize) -> ListItem<'static> {
    let text_style = if item.is_checked() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::raw(format!("[{}] ", item.icon())),
        Span::styled(format!("{:<width$}", item.text()), text_style),
    ]))
}
