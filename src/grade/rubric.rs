#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;
use itertools::process_results;

use super::{check::Check, engine::Rubric};
use crate::html::Document;

/// Elements that must appear at least once for the structure check.
const STRUCTURE_SELECTORS: [&str; 5] = ["html", "head", "body", "title", "meta[charset]"];

/// Sectioning elements that must all appear for the semantic check.
const SEMANTIC_ELEMENTS: [&str; 5] = ["header", "article", "aside", "footer", "nav"];

/// Fewest images the submission may contain.
const MIN_IMAGES: usize = 4;

/// Fewest links the submission may contain.
const MIN_LINKS: usize = 4;

/// Minimum number of each heading level, `h1` through `h4`.
const MIN_HEADINGS: [(&str, usize); 4] = [("h1", 1), ("h2", 1), ("h3", 2), ("h4", 1)];

/// Fewest `ol` and `ul` elements respectively.
const MIN_LISTS: [(&str, usize); 2] = [("ol", 1), ("ul", 2)];

/// Fewest `strong` and `em` elements respectively.
const MIN_FORMATTING: [(&str, usize); 2] = [("strong", 4), ("em", 1)];

/// True when every selector matches at least one element.
fn has_all(document: &Document, selectors: &[&str]) -> Result<bool> {
    process_results(selectors.iter().map(|s| document.has(s)), |mut found| found.all(|f| f))
}

/// True when every selector matches at least its paired number of elements.
fn has_at_least(document: &Document, minimums: &[(&str, usize)]) -> Result<bool> {
    process_results(
        minimums
            .iter()
            .map(|(selector, min)| document.count(selector).map(|n| n >= *min)),
        |mut met| met.all(|m| m),
    )
}

/// Whether the attribute is present with a non-empty value.
fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// The document was read from one of the candidate files.
pub fn html_file_exists(document: &Document) -> Result<bool> {
    Ok(document.source().is_some())
}

/// Doctype, the document skeleton, a title and a charset declaration.
pub fn valid_structure(document: &Document) -> Result<bool> {
    Ok(document.has_doctype() && has_all(document, &STRUCTURE_SELECTORS)?)
}

/// All five sectioning elements.
pub fn semantic_elements(document: &Document) -> Result<bool> {
    has_all(document, &SEMANTIC_ELEMENTS)
}

/// Enough images, each with a non-empty `src` and `alt`.
pub fn images_well_formed(document: &Document) -> Result<bool> {
    let images = document.select("img")?;
    if images.len() < MIN_IMAGES {
        return Ok(false);
    }

    Ok(images.iter().all(|img| {
        let img = img.value();
        non_empty(img.attr("src")) && non_empty(img.attr("alt"))
    }))
}

/// Enough links, each carrying an `href`, even an empty one.
pub fn links_well_formed(document: &Document) -> Result<bool> {
    let links = document.select("a")?;
    if links.len() < MIN_LINKS {
        return Ok(false);
    }

    Ok(links.iter().all(|a| a.value().attr("href").is_some()))
}

/// `h1`, `h2`, two `h3` and an `h4`.
pub fn heading_hierarchy(document: &Document) -> Result<bool> {
    has_at_least(document, &MIN_HEADINGS)
}

/// One ordered and two unordered lists.
pub fn lists_present(document: &Document) -> Result<bool> {
    has_at_least(document, &MIN_LISTS)
}

/// Four `strong` and one `em`.
pub fn text_formatting(document: &Document) -> Result<bool> {
    has_at_least(document, &MIN_FORMATTING)
}

/// The rubric every submission is graded against, worth 100 points.
pub fn standard_rubric() -> Rubric {
    Rubric::new(vec![
        Check::new("HTML file exists", 5, html_file_exists),
        Check::new("Valid HTML structure", 10, valid_structure),
        Check::new("Semantic HTML elements", 25, semantic_elements),
        Check::new("Images with proper attributes", 15, images_well_formed),
        Check::new("Links with href attributes", 10, links_well_formed),
        Check::new("Proper heading hierarchy", 15, heading_hierarchy),
        Check::new("Lists (ordered and unordered)", 10, lists_present),
        Check::new("Text formatting elements", 10, text_formatting),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Document {
        Document::new(format!("<!doctype html><html><head></head><body>{body}</body></html>"))
    }

    fn images(attrs: &[&str]) -> String {
        attrs.iter().map(|a| format!("<img {a}>")).collect()
    }

    #[test]
    fn standard_rubric_is_worth_one_hundred() {
        let rubric = standard_rubric();
        assert_eq!(rubric.checks().len(), 8);
        assert_eq!(rubric.total_possible(), 100);
        assert_eq!(rubric.checks()[2].name(), "Semantic HTML elements");
        assert_eq!(rubric.checks()[2].points(), 25);
    }

    #[test]
    fn file_exists_requires_a_source() {
        assert!(!html_file_exists(&doc("")).unwrap());
        let from_file = Document::from_source("index.html", String::new());
        assert!(html_file_exists(&from_file).unwrap());
    }

    #[test]
    fn structure_requires_doctype_title_and_charset() {
        let head = r#"<head><meta charset="utf-8"><title>t</title></head>"#;
        let full = Document::new(format!("<!DOCTYPE html><html>{head}<body></body></html>"));
        assert!(valid_structure(&full).unwrap());

        let no_doctype = Document::new(format!("<html>{head}<body></body></html>"));
        assert!(!valid_structure(&no_doctype).unwrap());

        let no_charset = Document::new(
            "<!doctype html><html><head><meta name=\"x\"><title>t</title></head></html>".into(),
        );
        assert!(!valid_structure(&no_charset).unwrap());

        let no_title = Document::new(
            "<!doctype html><html><head><meta charset=\"utf-8\"></head></html>".into(),
        );
        assert!(!valid_structure(&no_title).unwrap());
    }

    #[test]
    fn semantic_elements_are_all_or_nothing() {
        let all = doc("<header></header><nav></nav><article></article><aside></aside><footer></footer>");
        assert!(semantic_elements(&all).unwrap());

        let missing_aside = doc("<header></header><nav></nav><article></article><footer></footer>");
        assert!(!semantic_elements(&missing_aside).unwrap());
    }

    #[test]
    fn images_need_four_with_src_and_alt() {
        let good = r#"src="a.png" alt="a""#;
        assert!(images_well_formed(&doc(&images(&[good; 4]))).unwrap());
        assert!(!images_well_formed(&doc(&images(&[good; 3]))).unwrap());

        let empty_alt = images(&[good, good, good, r#"src="d.png" alt="""#]);
        assert!(!images_well_formed(&doc(&empty_alt)).unwrap());

        let missing_src = images(&[good, good, good, r#"alt="d""#]);
        assert!(!images_well_formed(&doc(&missing_src)).unwrap());

        let empty_src = images(&[good, good, good, r#"src="" alt="d""#]);
        assert!(!images_well_formed(&doc(&empty_src)).unwrap());

        let templated = format!("<template>{}</template>", images(&[good; 4]));
        assert!(!images_well_formed(&doc(&templated)).unwrap());
    }

    #[test]
    fn links_only_need_href_present() {
        let empty_hrefs = doc(
            r##"<a href="">1</a><a href="">2</a><a href="#">3</a><a href="x">4</a>"##,
        );
        assert!(links_well_formed(&empty_hrefs).unwrap());

        let missing = doc(r#"<a href="">1</a><a href="">2</a><a href="">3</a><a>4</a>"#);
        assert!(!links_well_formed(&missing).unwrap());

        let too_few = doc(r#"<a href="a">1</a><a href="b">2</a><a href="c">3</a>"#);
        assert!(!links_well_formed(&too_few).unwrap());
    }

    #[test]
    fn headings_need_two_h3() {
        assert!(heading_hierarchy(&doc("<h1></h1><h2></h2><h3></h3><h3></h3><h4></h4>")).unwrap());
        assert!(!heading_hierarchy(&doc("<h1></h1><h2></h2><h3></h3><h4></h4>")).unwrap());
        assert!(!heading_hierarchy(&doc("<h2></h2><h3></h3><h3></h3><h4></h4>")).unwrap());
    }

    #[test]
    fn lists_need_one_ol_and_two_ul() {
        assert!(lists_present(&doc("<ol></ol><ul></ul><ul></ul>")).unwrap());
        assert!(!lists_present(&doc("<ol></ol><ul></ul>")).unwrap());
        assert!(!lists_present(&doc("<ul></ul><ul></ul>")).unwrap());
    }

    #[test]
    fn formatting_needs_four_strong_and_an_em() {
        let strong = "<strong>s</strong>".repeat(4);
        assert!(text_formatting(&doc(&format!("{strong}<em>e</em>"))).unwrap());
        assert!(!text_formatting(&doc(&strong)).unwrap());
        assert!(!text_formatting(&doc(&format!("{}<em>e</em>", "<b>s</b>".repeat(4)))).unwrap());
    }
}
