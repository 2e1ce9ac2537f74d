use httpmock::prelude::*;

use prodcal_core::{CalendarRequest, ProdcalConnector, ProdcalError, ScrapeProvider, Source, Strategy};
use prodcal_hh::HhConnector;

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

fn day_off(day: u32, label: &str) -> String {
    format!(
        concat!(
            r#"<div class="calendar-list__numbers__item calendar-list__numbers__item_day-off">"#,
            r#"<div class="calendar-list__numbers__item-label">{label}</div>{day}</div>"#
        ),
        label = label,
        day = day
    )
}

fn month_block(name: &str) -> String {
    let mut days = String::new();
    days.push_str(&day_off(6, "Выходной день"));
    days.push_str(&day_off(7, "Рождество Христово"));
    days.push_str(
        r#"<div class="calendar-list__numbers__item calendar-list__numbers__item_shortened">5 (сокращённый день)</div>"#,
    );
    format!(
        concat!(
            r#"<div class="calendar-list__item-body">"#,
            r#"<div class="calendar-list__item-title">{name}</div>{days}</div>"#,
            r#"<div class="calendar-list__item-note"></div>"#
        ),
        name = name,
        days = days
    )
}

fn fixture_page(month_count: usize) -> String {
    let months: String = (0..month_count)
        .map(|i| month_block(MONTH_NAMES[i % 12]))
        .collect();
    format!(
        concat!(
            "<html><body><div>{months}</div>",
            r#"<ul class="calendar-info-list">"#,
            r#"<li class="calendar-info-list__item">1 января - Новый год</li>"#,
            r#"<li class="calendar-info-list__item">7 января - Рождество</li></ul>"#,
            "</body></html>"
        ),
        months = months
    )
}

fn request(base_url: &str) -> CalendarRequest {
    CalendarRequest::new(2024, Source::HeadHunter, Strategy::Scrape)
        .unwrap()
        .with_base_url(base_url)
        .unwrap()
}

#[test]
fn advertises_scrape_only() {
    let connector = HhConnector::new_default();
    assert!(connector.as_scrape_provider().is_some());
    assert!(connector.as_api_provider().is_none());
}

#[test]
fn page_url_appends_the_year_without_separator() {
    let connector = HhConnector::new_default();
    let req = request("https://host.example/article/calendar");
    assert_eq!(
        connector.page_url(&req),
        "https://host.example/article/calendar2024"
    );
}

#[tokio::test]
async fn day_tokens_are_digit_runs_and_labels_split_weekends_from_holidays() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/calendar2024");
            then.status(200).body(fixture_page(12));
        })
        .await;

    let connector = HhConnector::new_default();
    let result = connector
        .scrape_calendar(&request(&format!("{}/calendar", server.base_url())))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.months.len(), 12);
    let january = &result.months[0];
    assert_eq!(january.name(), "Январь");
    assert_eq!(january.weekends, vec!["6"]);
    assert_eq!(january.holidays, vec!["7"]);
    assert_eq!(january.pre_holidays, vec!["5"]);
    assert_eq!(
        result.holiday_info,
        "1 января - Новый год\n7 января - Рождество"
    );
}

#[tokio::test]
async fn month_count_mismatch_aborts_with_malformed_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/calendar2024");
            then.status(200).body(fixture_page(13));
        })
        .await;

    let connector = HhConnector::new_default();
    let err = connector
        .scrape_calendar(&request(&format!("{}/calendar", server.base_url())))
        .await
        .unwrap_err();

    assert!(matches!(err, ProdcalError::MalformedPage { got: 13 }));
}
