//! Multipart parsing for the user forms.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use hobbyhub_app::ports::UploadedFile;

/// Fields accepted by the add-user and edit-user forms.
#[derive(Debug, Default)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    /// Hidden field carrying the reference already stored on the user.
    pub existing_image: Option<String>,
    /// At most one uploaded `profileImage` file.
    pub upload: Option<UploadedFile>,
}

/// Drain a multipart stream into a [`UserForm`].
///
/// A file part with an empty filename or no content counts as "no upload";
/// browsers submit such a part when the file input is left blank.
///
/// # Errors
///
/// Returns the transport error when a part cannot be read.
pub async fn parse_user_form(mut multipart: Multipart) -> Result<UserForm, MultipartError> {
    let mut form = UserForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "username" => form.username = field.text().await?,
            "password" => form.password = field.text().await?,
            "existingImage" => form.existing_image = Some(field.text().await?),
            "profileImage" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.upload = Some(UploadedFile::new(base_name(&file_name), bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Strip any directory components a client may have sent with the filename.
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
