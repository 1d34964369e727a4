use zd_core::FontSize;

use serde::Deserialize;

/// Body of `PUT /users/me/font-size`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeRequest {
    pub font_size: FontSize,
}
