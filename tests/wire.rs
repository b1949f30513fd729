use cellsynt::{
    CellsyntClient, CellsyntError, Charset, Credentials, FORM_CONTENT_TYPE, Message, Options,
    Originator, OriginatorType, Recipient, TextMessage,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CellsyntClient {
    CellsyntClient::builder(Credentials::new("username", "password").unwrap())
        .originator(Originator::new("sendername").unwrap())
        .endpoint(format!("{}/sms.php", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn posts_form_body_and_reads_tracking_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms.php"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string(
            "allowconcat=6&charset=UTF-8&destination=0046703112233&originator=test&originatortype=alpha&password=password&text=test&type=text&username=username",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("OK: de8c4a032fb45ae65ab9e349a8dc2458\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let message = Message::Text(
        TextMessage::new(Recipient::one("0046703112233"), "test")
            .with_charset(Charset::Utf8)
            .with_allow_concat(true)
            .with_options(Options::new(
                OriginatorType::Alpha,
                Originator::new("test").unwrap(),
            )),
    );

    let response = client_for(&server).send_message(message).await.unwrap();
    assert!(response.success);
    assert_eq!(response.tracking_ids.len(), 1);
    assert_eq!(
        response.tracking_ids[0].as_str(),
        "de8c4a032fb45ae65ab9e349a8dc2458"
    );
}

#[tokio::test]
async fn gateway_error_on_non_2xx_status_is_read_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms.php"))
        .respond_with(ResponseTemplate::new(501).set_body_string("Error: mocked error\n"))
        .expect(1)
        .mount(&server)
        .await;

    let message = Message::Text(TextMessage::new(Recipient::one("0046703112233"), "test"));
    let err = client_for(&server).send_message(message).await.unwrap_err();
    assert!(matches!(
        err,
        CellsyntError::Gateway { ref message } if message == "mocked error"
    ));
}

#[tokio::test]
async fn missing_destination_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK: x"))
        .expect(0)
        .mount(&server)
        .await;

    let message = Message::Unicode(TextMessage::new(Recipient::default(), "Ελλάδα"));
    let err = client_for(&server).send_message(message).await.unwrap_err();
    assert!(matches!(err, CellsyntError::Validation(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client = CellsyntClient::builder(Credentials::new("username", "password").unwrap())
        .endpoint("http://127.0.0.1:1/sms.php")
        .build()
        .unwrap();
    let message = Message::Text(TextMessage::new(Recipient::one("0046703112233"), "test"));
    let err = client.send_message(message).await.unwrap_err();
    assert!(matches!(err, CellsyntError::Transport(_)));
}
