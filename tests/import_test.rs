mod common;

use astel::astel::Astel;
use astel::astel_errors::AstelError;
use astel::storage::{MemoryReportStore, ReportStore};

use common::{
    minimal_report_html, FlakyFetcher, NetworkDownFetcher, NullResolver, PanickingFetcher,
    StaticFetcher, TimeoutFetcher,
};

fn importer(fetcher: impl astel::fetch::ReportFetcher + 'static) -> Astel {
    Astel::with_collaborators(Box::new(fetcher), Box::new(NullResolver))
}

#[test]
fn test_import_persists_parsed_report() {
    let store = MemoryReportStore::new();
    let astel = importer(StaticFetcher::new(vec![(5, minimal_report_html(5))]));

    astel.import_report(&store, 5).unwrap();

    let report = store.get(5).expect("report persisted");
    assert_eq!(report.report_id, 5);
    assert_eq!(report.title, "Photometric monitoring of field 5");
    assert!(store.report_exists(5).unwrap());
}

#[test]
fn test_already_imported_id_is_rejected_before_fetch() {
    let store = MemoryReportStore::new();
    importer(StaticFetcher::new(vec![(5, minimal_report_html(5))]))
        .import_report(&store, 5)
        .unwrap();

    // A fetch attempt would panic; the existence check runs first.
    let astel = importer(PanickingFetcher);
    assert_eq!(
        astel.import_report(&store, 5),
        Err(AstelError::ReportAlreadyExists(5))
    );
}

#[test]
fn test_empty_page_means_not_found() {
    let store = MemoryReportStore::new();
    let astel = importer(StaticFetcher::empty());

    assert_eq!(
        astel.import_report(&store, 1),
        Err(AstelError::ReportNotFound(1))
    );
    assert!(store.is_empty());
}

#[test]
fn test_transport_errors_keep_their_classification() {
    let store = MemoryReportStore::new();

    assert!(matches!(
        importer(NetworkDownFetcher).import_report(&store, 1),
        Err(AstelError::NetworkError(_))
    ));
    assert!(matches!(
        importer(TimeoutFetcher).import_report(&store, 1),
        Err(AstelError::DownloadFailError(_))
    ));
    assert!(store.is_empty());
}

#[test]
fn test_non_conforming_page_is_a_missing_element() {
    let store = MemoryReportStore::new();
    let page = "<html><body><p>not a report page</p></body></html>".to_string();
    let astel = importer(StaticFetcher::new(vec![(1, page)]));

    assert_eq!(
        astel.import_report(&store, 1),
        Err(AstelError::MissingReportElement("title".into()))
    );
    assert!(store.is_empty());
}

#[test]
fn test_auto_import_stops_at_first_unpublished_id() {
    let store = MemoryReportStore::new();
    let pages = (1..=3).map(|id| (id, minimal_report_html(id))).collect();
    let astel = importer(StaticFetcher::new(pages));

    assert_eq!(astel.import_all_reports(&store).unwrap(), 3);
    assert_eq!(store.len(), 3);
    for id in 1..=3 {
        assert!(store.report_exists(id).unwrap());
    }

    // Nothing new on a second run.
    assert_eq!(astel.import_all_reports(&store).unwrap(), 0);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_auto_import_resumes_after_highest_persisted_id() {
    let store = MemoryReportStore::new();
    let first_batch = (1..=2).map(|id| (id, minimal_report_html(id))).collect();
    importer(StaticFetcher::new(first_batch))
        .import_all_reports(&store)
        .unwrap();

    // The second fetcher only serves ids 3 and 4; earlier ids would come
    // back empty and abort the loop if they were re-requested.
    let second_batch = (3..=4).map(|id| (id, minimal_report_html(id))).collect();
    let astel = importer(StaticFetcher::new(second_batch));
    assert_eq!(astel.import_all_reports(&store).unwrap(), 2);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_auto_import_surfaces_transient_errors() {
    let store = MemoryReportStore::new();
    let pages = vec![(1, minimal_report_html(1)), (3, minimal_report_html(3))];
    let astel = importer(FlakyFetcher::new(pages, 2));

    assert!(matches!(
        astel.import_all_reports(&store),
        Err(AstelError::NetworkError(_))
    ));
    // The loop never skips over a failing id.
    assert_eq!(store.len(), 1);
    assert!(store.report_exists(1).unwrap());
    assert!(!store.report_exists(3).unwrap());
}
