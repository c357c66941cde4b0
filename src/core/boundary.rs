use crate::core::coords::parse_coordinates;
use crate::domain::model::Polygon;
use crate::domain::ports::Diagnostics;
use roxmltree::Node;

/// Collects boundary points from every element below (and including)
/// `subtree` that the predicate accepts, concatenated in document order.
///
/// Returns `None` when no element matches at all; callers rely on the
/// distinction between "no boundary data" and a boundary with zero vertices.
pub fn extract_boundary<D, F>(subtree: Node, matches: F, diag: &D) -> Option<Polygon>
where
    D: Diagnostics,
    F: Fn(&Node) -> bool,
{
    let mut matched = false;
    let mut points = Polygon::new();

    for node in subtree.descendants().filter(|n| n.is_element()) {
        if !matches(&node) {
            continue;
        }
        matched = true;
        if let Some(text) = node.text() {
            points.extend(parse_coordinates(text, diag));
        }
    }

    matched.then_some(points)
}

/// Predicate for the full boundary map, where coordinate elements are
/// namespace-qualified.
pub fn namespaced_coordinates(namespace: &str) -> impl Fn(&Node) -> bool + '_ {
    move |node| {
        node.tag_name().name() == "coordinates"
            && node.tag_name().namespace() == Some(namespace)
    }
}

/// Predicate for fragments embedded in CSV cells, which carry no namespace.
pub fn plain_coordinates(node: &Node) -> bool {
    node.tag_name().name() == "coordinates"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Point;
    use roxmltree::Document;

    struct NullDiagnostics;

    impl Diagnostics for NullDiagnostics {
        fn debug(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
    }

    #[test]
    fn test_no_matching_element_is_absent_not_empty() {
        let doc = Document::parse("<Polygon><name>90210</name></Polygon>").unwrap();
        let result = extract_boundary(doc.root(), plain_coordinates, &NullDiagnostics);
        assert!(result.is_none());
    }

    #[test]
    fn test_matched_but_empty_element_yields_zero_vertices() {
        let doc = Document::parse("<Polygon><coordinates></coordinates></Polygon>").unwrap();
        let result = extract_boundary(doc.root(), plain_coordinates, &NullDiagnostics);
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_concatenates_matches_in_document_order() {
        let doc = Document::parse(
            "<Placemark><a><coordinates>1,2 3,4</coordinates></a>\
             <b><coordinates>5,6</coordinates></b></Placemark>",
        )
        .unwrap();
        let result = extract_boundary(doc.root(), plain_coordinates, &NullDiagnostics).unwrap();
        assert_eq!(
            result,
            vec![Point::new("1", "2"), Point::new("3", "4"), Point::new("5", "6")]
        );
    }

    #[test]
    fn test_namespaced_predicate_ignores_unqualified_elements() {
        let doc = Document::parse(
            "<kml xmlns=\"http://example.com/ns\">\
             <coordinates>1,2</coordinates></kml>",
        )
        .unwrap();

        let qualified = extract_boundary(
            doc.root(),
            namespaced_coordinates("http://example.com/ns"),
            &NullDiagnostics,
        );
        assert_eq!(qualified, Some(vec![Point::new("1", "2")]));

        let wrong_ns = extract_boundary(
            doc.root(),
            namespaced_coordinates("http://other.example.com"),
            &NullDiagnostics,
        );
        assert!(wrong_ns.is_none());
    }
}
