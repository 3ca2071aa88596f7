use serde_json::{Map, Value};

use crate::domain::{NotificationMode, ParseMode, WebPreviewMode};

pub const PARSE_MODE_FIELD: &str = "parse_mode";
pub const WEB_PREVIEW_FIELD: &str = "disable_web_page_preview";
pub const NOTIFICATION_FIELD: &str = "disable_notification";

// Each push_* leaves the tree untouched when the value equals the enum's DEFAULT.

pub fn push_parse_mode(tree: &mut Map<String, Value>, parse_mode: ParseMode) {
    if parse_mode == ParseMode::DEFAULT {
        return;
    }
    let wire = match parse_mode {
        ParseMode::None => return,
        ParseMode::Markdown => "Markdown",
        ParseMode::Html => "HTML",
    };
    tree.insert(PARSE_MODE_FIELD.to_owned(), Value::from(wire));
}

pub fn push_web_preview(tree: &mut Map<String, Value>, web_preview: WebPreviewMode) {
    if web_preview == WebPreviewMode::DEFAULT {
        return;
    }
    let disable = match web_preview {
        WebPreviewMode::Disable => true,
        WebPreviewMode::Enable => false,
    };
    tree.insert(WEB_PREVIEW_FIELD.to_owned(), Value::Bool(disable));
}

pub fn push_notification(tree: &mut Map<String, Value>, notification: NotificationMode) {
    if notification == NotificationMode::DEFAULT {
        return;
    }
    let disable = match notification {
        NotificationMode::Disable => true,
        NotificationMode::Enable => false,
    };
    tree.insert(NOTIFICATION_FIELD.to_owned(), Value::Bool(disable));
}
