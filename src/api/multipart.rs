// src/api/multipart.rs
//! Minimal multipart/form-data encoder for file uploads.
//!
//! The backend reads exactly one `file` field per request, so this only
//! covers file parts. Boundary is randomized per form.

use rand::Rng;

pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let boundary = format!(
            "----VigilFormBoundary{:016x}{:016x}",
            rng.gen::<u64>(),
            rng.gen::<u64>()
        );
        Self {
            boundary,
            body: Vec::new(),
        }
    }

    /// Append one file part. `filename` must not contain quotes; the
    /// backend sanitizes names on its side as well.
    pub fn add_file(&mut self, field: &str, filename: &str, content_type: &str, data: &[u8]) {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, filename
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
    }

    /// Value for the request's Content-Type header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Close the form and return the finished body.
    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_contains_part_and_terminator() {
        let mut form = MultipartForm::new();
        form.add_file("file", "auth.log", "application/octet-stream", b"line one\n");
        let content_type = form.content_type();
        let body = form.finish();
        let text = String::from_utf8(body).unwrap();

        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        assert!(text.starts_with(&format!("--{}\r\n", boundary)));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"auth.log\""));
        assert!(text.contains("Content-Type: application/octet-stream\r\n\r\nline one\n"));
        assert!(text.ends_with(&format!("--{}--\r\n", boundary)));
    }

    #[test]
    fn boundaries_differ_between_forms() {
        let a = MultipartForm::new();
        let b = MultipartForm::new();
        assert_ne!(a.content_type(), b.content_type());
    }

    #[test]
    fn multiple_parts_share_one_boundary() {
        let mut form = MultipartForm::new();
        form.add_file("file", "a.log", "text/plain", b"a");
        form.add_file("file", "b.log", "text/plain", b"b");
        let content_type = form.content_type();
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap()
            .to_string();
        let text = String::from_utf8(form.finish()).unwrap();
        assert_eq!(text.matches(&format!("--{}\r\n", boundary)).count(), 2);
        assert_eq!(text.matches(&format!("--{}--", boundary)).count(), 1);
    }
}
