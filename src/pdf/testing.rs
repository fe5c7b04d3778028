//! Fixture PDFs for unit tests.
//!
//! Every page draws the text `Page N`, so a page's origin can be recovered
//! from its content stream after it has been copied around.

use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

pub fn numbered_document(pages: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => Object::Reference(font_id) },
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let content = format!("BT /F1 12 Tf 72 720 Td (Page {n}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let media_box = vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ];
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => media_box,
                "Contents" => Object::Reference(content_id),
                "Resources" => Object::Reference(resources_id),
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(i64::from(pages)),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

pub fn write_numbered_pdf(path: &Path, pages: u32) {
    numbered_document(pages)
        .save(path)
        .expect("failed to write fixture PDF");
}

/// The `Page N` marker of every page in `path`, in document order.
pub fn page_markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("failed to load PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).expect("page has no content");
            let text = String::from_utf8_lossy(&content);
            let start = text.find('(').expect("no text in page") + 1;
            let end = text[start..].find(')').expect("unterminated text") + start;
            text[start..end].to_string()
        })
        .collect()
}
