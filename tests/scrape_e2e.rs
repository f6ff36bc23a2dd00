use mockito::{Matcher, Mock, ServerGuard};
use standout_scrape::{Jobs, Scraper, ScraperConfig, ScraperInput, StandOutScraper};

fn card(title: &str, company: &str, href: &str) -> String {
    format!(
        r#"<div class="chakra-box">
             <p class="chakra-text css-134zrag">{}</p>
             <p class="chakra-text css-14pw5qv">{}</p>
             <span class="css-111tzkx">30 Nov 2025</span>
             <a class="chakra-link chakra-button css-19vrdtv" href="{}">View</a>
           </div>"#,
        title, company, href
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

fn detail(location: &str, mode: &str) -> String {
    format!(
        r#"<html><body>
             <div><p class="chakra-text css-i3b6lo">Location:</p><span>{}</span></div>
             <div><p class="chakra-text css-i3b6lo">Mode:</p><span>{}</span></div>
             <div><p class="chakra-text css-i3b6lo">Description:</p><p>Ship it.</p></div>
           </body></html>"#,
        location, mode
    )
}

async fn listing_mock(server: &mut ServerGuard, n: u32, status: usize, body: String, hits: usize) -> Mock {
    server
        .mock("GET", "/jobs")
        .match_query(Matcher::UrlEncoded("page".into(), n.to_string()))
        .with_status(status)
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

async fn detail_mock(server: &mut ServerGuard, path: &str, body: String, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

fn test_config(server: &ServerGuard) -> ScraperConfig {
    ScraperConfig {
        delay_secs: 0,
        ..ScraperConfig::new(&server.url())
    }
}

#[tokio::test]
async fn test_two_jobs_then_empty_page() {
    let mut server = mockito::Server::new_async().await;
    let page1 = listing_mock(
        &mut server,
        1,
        200,
        page(&[card("Rust Engineer", "Acme", "/jobs/1"), card("SRE", "Globex", "/jobs/2")]),
        1,
    )
    .await;
    let page2 = listing_mock(&mut server, 2, 200, page(&[]), 1).await;
    let d1 = detail_mock(&mut server, "/jobs/1", detail("Lagos", "Remote"), 1).await;
    let d2 = detail_mock(&mut server, "/jobs/2", detail("Nairobi", "Onsite"), 1).await;

    let response = Jobs::new()
        .with_config(test_config(&server))
        .with_results_wanted(10)
        .generate()
        .await
        .unwrap();

    assert_eq!(response.len(), 2);
    let first = &response.jobs[0];
    assert_eq!(first.title, "Rust Engineer");
    assert_eq!(first.company_name, "Acme");
    assert_eq!(first.deadline.as_deref(), Some("30 Nov 2025"));
    assert_eq!(first.job_url, format!("{}/jobs/1", server.url()));
    assert_eq!(first.location.as_deref(), Some("Lagos"));
    assert_eq!(first.mode.as_deref(), Some("Remote"));
    assert_eq!(first.address, None);
    assert_eq!(first.description.as_deref(), Some("Ship it."));
    assert_eq!(response.jobs[1].location.as_deref(), Some("Nairobi"));

    page1.assert_async().await;
    page2.assert_async().await;
    d1.assert_async().await;
    d2.assert_async().await;
}

#[tokio::test]
async fn test_quota_of_one_fetches_first_detail_only() {
    let mut server = mockito::Server::new_async().await;
    let page1 = listing_mock(
        &mut server,
        1,
        200,
        page(&[
            card("First", "Acme", "/jobs/1"),
            card("Second", "Acme", "/jobs/2"),
            card("Third", "Acme", "/jobs/3"),
        ]),
        1,
    )
    .await;
    let page2 = listing_mock(&mut server, 2, 200, page(&[]), 0).await;
    let d1 = detail_mock(&mut server, "/jobs/1", detail("Accra", "Hybrid"), 1).await;
    let d2 = detail_mock(&mut server, "/jobs/2", detail("Accra", "Hybrid"), 0).await;
    let d3 = detail_mock(&mut server, "/jobs/3", detail("Accra", "Hybrid"), 0).await;

    let scraper = StandOutScraper::new(test_config(&server)).unwrap();
    let response = scraper.scrape(&ScraperInput::new(1)).await;

    assert_eq!(response.len(), 1);
    assert_eq!(response.jobs[0].title, "First");
    assert_eq!(response.jobs[0].mode.as_deref(), Some("Hybrid"));

    page1.assert_async().await;
    page2.assert_async().await;
    d1.assert_async().await;
    d2.assert_async().await;
    d3.assert_async().await;
}

#[tokio::test]
async fn test_server_error_stops_pagination() {
    let mut server = mockito::Server::new_async().await;
    let page1 = listing_mock(&mut server, 1, 200, page(&[card("Only", "Acme", "/jobs/1")]), 1).await;
    let page2 = listing_mock(&mut server, 2, 503, String::new(), 1).await;
    let page3 = listing_mock(&mut server, 3, 200, page(&[card("Late", "Acme", "/jobs/9")]), 0).await;
    let _d1 = detail_mock(&mut server, "/jobs/1", detail("Kigali", "Remote"), 1).await;

    let scraper = StandOutScraper::new(test_config(&server)).unwrap();
    let response = scraper.scrape(&ScraperInput::new(10)).await;

    assert_eq!(response.len(), 1);
    assert_eq!(response.jobs[0].title, "Only");
    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
}

#[tokio::test]
async fn test_missing_detail_page_keeps_listing_fields() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = listing_mock(&mut server, 1, 200, page(&[card("Analyst", "Initech", "/jobs/404")]), 1).await;
    let _page2 = listing_mock(&mut server, 2, 200, page(&[]), 1).await;
    let gone = server
        .mock("GET", "/jobs/404")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let scraper = StandOutScraper::new(test_config(&server)).unwrap();
    let response = scraper.scrape(&ScraperInput::new(5)).await;

    assert_eq!(response.len(), 1);
    let job = &response.jobs[0];
    assert_eq!(job.title, "Analyst");
    assert_eq!(job.company_name, "Initech");
    assert_eq!(job.location, None);
    assert_eq!(job.address, None);
    assert_eq!(job.mode, None);
    assert_eq!(job.description, None);
    gone.assert_async().await;
}

#[tokio::test]
async fn test_response_serializes_to_json() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = listing_mock(&mut server, 1, 200, page(&[card("Dev", "Acme", "/jobs/1")]), 1).await;
    let _d1 = detail_mock(&mut server, "/jobs/1", detail("Lima", "Remote"), 1).await;

    let response = Jobs::new()
        .with_config(test_config(&server))
        .with_results_wanted(1)
        .generate()
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["jobs"][0]["title"], "Dev");
    assert_eq!(json["jobs"][0]["location"], "Lima");
    assert!(json["jobs"][0]["address"].is_null());
}
