// ============================================================================
// FORM DATA - Multipart bodies (fields + files)
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{File, FormData, HtmlInputElement};
use crate::services::error::ApiError;

fn form_error(err: JsValue) -> ApiError {
    ApiError::Form(format!("{:?}", err))
}

/// Build a multipart body from text fields and `(field_name, file)` pairs
pub fn build_form_data(entries: &[(&str, String)], files: &[(&str, File)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    for (name, value) in entries {
        form.append_with_str(name, value).map_err(form_error)?;
    }
    for (name, file) in files {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(form_error)?;
    }
    Ok(form)
}

/// Files currently selected in an `<input type="file">`
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Pair every file with the same multipart field name
pub fn named_files<'a>(name: &'a str, files: Vec<File>) -> Vec<(&'a str, File)> {
    files.into_iter().map(|file| (name, file)).collect()
}
