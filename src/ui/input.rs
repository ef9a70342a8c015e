use std::rc::Rc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::events::ShopEvent;
use crate::ui::app::App;
use crate::ui::dom::{focusable_nodes, NodeRef};

/// Position in the focusable nodes of the active surface.
///
/// Only the index is kept: the surface is re-read on every move, so rows
/// that appear or disappear never leave a dangling handle behind.
#[derive(Debug, Default)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn current(&self, surface: &NodeRef) -> Option<NodeRef> {
        let nodes = focusable_nodes(surface);
        if nodes.is_empty() {
            return None;
        }
        Some(Rc::clone(&nodes[self.index % nodes.len()]))
    }

    pub fn advance(&mut self, surface: &NodeRef, step: isize) {
        let len = focusable_nodes(surface).len();
        if len == 0 {
            self.index = 0;
            return;
        }
        let current = (self.index % len) as isize;
        self.index = (current + step).rem_euclid(len as isize) as usize;
    }
}

/// Edit applied to the focused input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let editing = app.focused_is_input();
    match key.code {
        KeyCode::Esc => {
            app.escape();
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => app.move_focus(1),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => app.move_focus(-1),
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace if editing => app.edit(Edit::Backspace),
        KeyCode::Char(ch) if editing && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit(Edit::Insert(ch));
        }
        KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('b') if !app.modal_is_open() => {
            app.dispatch(ShopEvent::BasketOpen);
        }
        _ => {}
    }
}

/// A left click outside the modal, or on its titled top border, closes it.
/// Other clicks inside are ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.modal_is_open() {
        return;
    }
    let Some(area) = app.modal_area() else {
        return;
    };
    let inside = mouse.column >= area.x
        && mouse.column < area.right()
        && mouse.row >= area.y
        && mouse.row < area.bottom();
    if !inside {
        app.click_outside();
    } else if mouse.row == area.y {
        app.escape();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
