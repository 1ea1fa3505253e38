use axum::response::Html;

use crate::summary::ByteSummary;
use crate::upload_store::UploadInfo;

/// Builds the visualization page around an already encoded PNG and dump.
pub fn get_visualization_html(
    png_base64: &str,
    hex_dump: &str,
    summary: &ByteSummary,
    info: Option<&UploadInfo>,
) -> Html<String> {
    let file_label = info
        .and_then(|i| i.file_name.as_deref())
        .map(escape_html)
        .unwrap_or_else(|| "uploaded file".to_string());

    let truncation_note = if summary.truncated_bytes > 0 {
        format!(
            "<p class=\"note\">Only the first {} bytes fit into the image; {} bytes are not shown there.</p>",
            summary.raster_capacity, summary.truncated_bytes
        )
    } else {
        String::new()
    };

    let html = VISUALIZATION_HTML
        .replace("<!-- FILE_LABEL -->", &file_label)
        .replace("<!-- TOTAL_BYTES -->", &summary.total_bytes.to_string())
        .replace("<!-- PRINTABLE -->", &summary.printable.to_string())
        .replace("<!-- NON_PRINTABLE -->", &summary.non_printable.to_string())
        .replace("<!-- TRUNCATION_NOTE -->", &truncation_note)
        .replace("<!-- IMAGE_SRC -->", &format!("data:image/png;base64,{}", png_base64))
        // Last, so nothing inside the dump is mistaken for a placeholder
        .replace("<!-- HEX_DUMP -->", &escape_html(hex_dump));
    Html(html)
}

pub fn get_uploaded_html(info: &UploadInfo) -> Html<String> {
    Html(format!(
        "<p>File uploaded!</p><p>{} bytes stored. <a href=\"/visualize\">Visualize</a></p>",
        info.size
    ))
}

/// Escapes the characters that are significant inside HTML text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// HTML template for the visualization page
const VISUALIZATION_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>File Visualization</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        img { image-rendering: pixelated; border: 1px solid #ccc; }
        pre { font-family: Menlo, Consolas, monospace; font-size: 13px; }
        .note { color: #a60; }
    </style>
</head>
<body>
    <h1>File Visualization</h1>
    <p><!-- FILE_LABEL -->: <!-- TOTAL_BYTES --> bytes, <!-- PRINTABLE --> printable, <!-- NON_PRINTABLE --> non-printable</p>
    <h2>Image Representation</h2>
    <img src="<!-- IMAGE_SRC -->" alt="Image Representation"/>
    <!-- TRUNCATION_NOTE -->
    <h2>Text Representation</h2>
    <pre><!-- HEX_DUMP --></pre>
    <p><a href="/">Upload another file</a></p>
</body>
</html>
"#;
