use httpmock::prelude::*;

use prodcal_consultant::ConsultantConnector;
use prodcal_core::{CalendarRequest, ProdcalConnector, ProdcalError, ScrapeProvider, Source, Strategy};

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

fn month_block(name: &str) -> String {
    format!(
        concat!(
            r#"<div class="cal"><h4 class="month">{name}</h4><table>"#,
            r#"<tr><th class="weekend">Сб</th><th class="weekend">Вс</th></tr>"#,
            r#"<tr><td>3</td><td class="preholiday">5*</td>"#,
            r#"<td class="weekend">6</td><td class="holiday weekend">7</td></tr>"#,
            r#"</table></div>"#
        ),
        name = name
    )
}

fn fixture_page(month_count: usize) -> String {
    let months: String = (0..month_count)
        .map(|i| month_block(MONTH_NAMES[i % 12]))
        .collect();
    format!(
        concat!(
            "<html><body>",
            "<blockquote><p>1, 7 января - Новогодние каникулы</p>",
            "<p>8 марта - Международный женский день</p></blockquote>",
            "{months}</body></html>"
        ),
        months = months
    )
}

fn request(base_url: &str) -> CalendarRequest {
    CalendarRequest::new(2024, Source::Consultant, Strategy::Scrape)
        .unwrap()
        .with_base_url(base_url)
        .unwrap()
}

#[test]
fn advertises_scrape_only() {
    let connector = ConsultantConnector::new_default();
    assert!(connector.as_scrape_provider().is_some());
    assert!(connector.as_api_provider().is_none());
    assert!(connector.supports_scrape());
    assert!(!connector.supports_api());
}

#[test]
fn page_url_trims_the_base_and_appends_the_year() {
    let connector = ConsultantConnector::new_default();
    let req = request("https://host.example/calendar/");
    assert_eq!(
        connector.page_url(&req),
        "https://host.example/calendar/2024"
    );
}

#[tokio::test]
async fn twelve_month_page_yields_twelve_months_in_document_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/2024");
            then.status(200).body(fixture_page(12));
        })
        .await;

    let connector = ConsultantConnector::new_default();
    let result = connector
        .scrape_calendar(&request(&server.base_url()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.year, 2024);
    assert_eq!(result.months.len(), 12);
    assert_eq!(result.months[0].name(), "Январь");
    assert_eq!(result.months[0].number(), 1);
    assert_eq!(result.months[4].name(), "Май");
    assert_eq!(result.months[11].number(), 12);
}

#[tokio::test]
async fn day_cells_are_partitioned_by_class_attribute() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/2024");
            then.status(200).body(fixture_page(12));
        })
        .await;

    let connector = ConsultantConnector::new_default();
    let result = connector
        .scrape_calendar(&request(&server.base_url()))
        .await
        .unwrap();

    let january = &result.months[0];
    // Header cells carry the weekend class too but must not produce tokens.
    assert_eq!(january.weekends, vec!["6"]);
    assert_eq!(january.holidays, vec!["7"]);
    assert_eq!(january.pre_holidays, vec!["5"]);
}

#[tokio::test]
async fn holiday_info_lines_are_joined_with_newlines() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/2024");
            then.status(200).body(fixture_page(12));
        })
        .await;

    let connector = ConsultantConnector::new_default();
    let result = connector
        .scrape_calendar(&request(&server.base_url()))
        .await
        .unwrap();

    assert_eq!(
        result.holiday_info,
        "1, 7 января - Новогодние каникулы\n8 марта - Международный женский день"
    );
}

#[tokio::test]
async fn month_count_mismatch_aborts_with_malformed_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/2024");
            then.status(200).body(fixture_page(11));
        })
        .await;

    let connector = ConsultantConnector::new_default();
    let err = connector
        .scrape_calendar(&request(&server.base_url()))
        .await
        .unwrap_err();

    assert!(matches!(err, ProdcalError::MalformedPage { got: 11 }));
    assert!(err.to_string().contains("expected 12"));
}

#[tokio::test]
async fn scraping_twice_is_idempotent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/2024");
            then.status(200).body(fixture_page(12));
        })
        .await;

    let connector = ConsultantConnector::new_default();
    let req = request(&server.base_url());
    let first = connector.scrape_calendar(&req).await.unwrap();
    let second = connector.scrape_calendar(&req).await.unwrap();
    assert_eq!(first, second);
}
