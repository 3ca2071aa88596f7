use serde_json::{Map, Value};

use crate::domain::FileId;

pub const GET_FILE_METHOD: &str = "getFile";

pub fn encode_get_file(file_id: &FileId) -> Map<String, Value> {
    let mut tree = Map::new();
    tree.insert(FileId::FIELD.to_owned(), Value::from(file_id.as_str()));
    tree
}
