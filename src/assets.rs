//! References to binary assets kept by an external storage backend.
//!
//! Only the reference string is persisted, in the form `<upload dir>/<file>`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    CategoryIcon,
    ProductImage,
    ReviewImage,
}

impl AssetKind {
    pub fn upload_dir(&self) -> &'static str {
        match self {
            AssetKind::CategoryIcon => "category_icons/",
            AssetKind::ProductImage => "product_images/",
            AssetKind::ReviewImage => "review_images/",
        }
    }

    /// Build the stored reference for a file name. References that already
    /// live under this kind's directory are returned unchanged.
    pub fn reference(&self, file_name: &str) -> String {
        let file_name = file_name.trim().trim_start_matches('/');
        let dir = self.upload_dir();
        if file_name.starts_with(dir) {
            file_name.to_string()
        } else {
            format!("{dir}{file_name}")
        }
    }
}
