//! Focus helpers for the start menu and desktop context menu.

use wasm_bindgen::JsCast;

const MENU_ITEM_SELECTOR: &str =
    r#"[role="menuitem"], [role="menuitemcheckbox"], [role="menuitemradio"]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuMove {
    Next,
    Previous,
    First,
    Last,
}

impl MenuMove {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Index to focus among `len` items. Arrow moves wrap; an unfocused menu starts from the top.
fn roving_target(len: usize, focused: Option<usize>, movement: MenuMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = focused.unwrap_or(0);
    Some(match movement {
        MenuMove::Next => (current + 1) % len,
        MenuMove::Previous => (current + len - 1) % len,
        MenuMove::First => 0,
        MenuMove::Last => len - 1,
    })
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn as_html(element: web_sys::Element) -> Option<web_sys::HtmlElement> {
    element.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Focuses the element with `id`; `false` when it is missing or not an HTML element.
pub(super) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(as_html)
    else {
        return false;
    };
    let _ = element.focus();
    true
}

fn enabled_menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(nodes) = document()
        .and_then(|document| document.get_element_by_id(menu_id))
        .and_then(|menu| menu.query_selector_all(MENU_ITEM_SELECTOR).ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| {
            item.get_attribute("disabled").is_none()
                && item.get_attribute("aria-disabled").as_deref() != Some("true")
        })
        .collect()
}

fn move_menu_focus(menu_id: &str, movement: MenuMove) -> bool {
    let items = enabled_menu_items(menu_id);
    let focused = document()
        .and_then(|document| document.active_element())
        .map(|active| active.id())
        .filter(|id| !id.is_empty())
        .and_then(|id| items.iter().position(|item| item.id() == id));
    let Some(target) = roving_target(items.len(), focused, movement) else {
        return false;
    };
    let _ = items[target].focus();
    true
}

/// Focuses the first enabled item of `menu_id`.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    move_menu_focus(menu_id, MenuMove::First)
}

/// Arrow, Home and End navigation inside a menu. Handled keys stop propagating.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let handled = MenuMove::from_key(&ev.key())
        .is_some_and(|movement| move_menu_focus(menu_id, movement));
    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}
