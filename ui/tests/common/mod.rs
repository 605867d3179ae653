use egui_kittest::Harness;
use lendboard_ui::LendboardApp;
use lendboard_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Window size comfortably above the mobile breakpoint.
pub const DESKTOP_SIZE: egui::Vec2 = egui::Vec2::new(1100.0, 800.0);

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, LendboardApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, LendboardApp> {
        &mut self.harness
    }

    /// App served a users payload by a local mock endpoint.
    pub async fn new_app(users: serde_json::Value) -> Self {
        let mock_server = setup_mock_server(ResponseTemplate::new(200).set_body_json(users)).await;
        let app = LendboardApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(DESKTOP_SIZE)
            .build_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// App whose users endpoint answers with the given status and no body.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = setup_mock_server(ResponseTemplate::new(status_code)).await;
        let app = LendboardApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(DESKTOP_SIZE)
            .build_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }
}

async fn setup_mock_server(response: ResponseTemplate) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Endpoint with no listener behind it. Cache hits short-circuit the fetch,
/// so tests seeded through the cache never reach the network.
#[allow(unused)]
pub const UNROUTABLE_ENDPOINT: &str = "http://127.0.0.1:9/";

/// App whose cache slot is pre-seeded, pointed at a dead endpoint.
#[allow(unused)]
pub fn seeded_harness(users: serde_json::Value) -> Harness<'static, LendboardApp> {
    seeded_harness_sized(users, DESKTOP_SIZE)
}

#[allow(unused)]
pub fn seeded_harness_sized(
    users: serde_json::Value,
    size: egui::Vec2,
) -> Harness<'static, LendboardApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    let records: Vec<lendboard_business::UserRecord> =
        serde_json::from_value(users).expect("test users should parse");

    let state = State::test(UNROUTABLE_ENDPOINT.to_owned());
    state
        .ctx
        .state_mut::<lendboard_business::UserCache>()
        .write_users(&records)
        .expect("in-memory cache write cannot fail");

    let app = LendboardApp::new(state);
    Harness::builder().with_size(size).build_eframe(|_| app)
}

/// Two users in the endpoint's wire shape.
#[allow(unused)]
pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        {
            "_id": "u-0001",
            "organization": "Lendsqr",
            "firstName": "Grace",
            "lastName": "Effiom",
            "email": "grace.effiom@lendsqr.com",
            "phoneNumber": "+2348078903721",
            "dateJoined": "2020-04-30T10:51:33.000Z",
            "status": "Active"
        },
        {
            "_id": "u-0002",
            "organization": "Irorun",
            "firstName": "Debby",
            "lastName": "Ogana",
            "email": "debby.ogana@irorun.com",
            "phoneNumber": "08160780928",
            "dateJoined": "2020-05-15T09:22:01.000Z",
            "status": "Pending"
        }
    ])
}
