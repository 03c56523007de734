pub mod docker;
pub mod store;

use std::sync::Arc;
use actix_web::{App, body::MessageBody, dev::{ServiceFactory, ServiceRequest, ServiceResponse}};
use customers::{store::{CustomerStore, StoreKind}, utils::{config::Configuration, context::InitialisationContext}};

// Interesting - test runner: https://dev.to/tjtelan/how-to-build-a-custom-integration-test-harness-in-rust-7n7

///
/// The configuration the tests start from - whatever the environment says, with an in-memory store.
///
pub fn test_config() -> Configuration {
    let mut config = Configuration::from_env().expect("The test configuration is not correct");
    config.store = StoreKind::Memory;
    config.base_url = String::new();
    config
}

///
/// Get an instance of an App with routes and an empty in-memory customer store.
///
pub async fn start_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = ()>> {

    start_app_with(test_config()).await
}

///
/// Get an instance of an App initialised with the same code as the binary, from the config given.
///
pub async fn start_app_with(config: Configuration) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = ()>> {

    let ctx = match customers::init_context(config).await {
        Ok(ctx) => ctx,
        Err(err) => panic!("init_context failed: {}", err)
    };
    customers::app(Arc::new(ctx))
}

///
/// Get an instance of an App backed by the customer store given rather than a configured one.
///
#[allow(dead_code)]
pub fn start_app_with_store(store: Arc<dyn CustomerStore>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = ()>> {

    customers::app(Arc::new(InitialisationContext::new(store, test_config())))
}

#[allow(dead_code)]
pub fn use_existing_containers() -> bool {
    match std::env::var("TESTS_USE_EXISTING_CONTAINERS") {
        Ok(value) => value.to_lowercase().eq("true"),
        Err(_) => false,
    }
}



// _    _ _______ _______ _____
// | |  | |__   __|__   __|  __ \
// | |__| |  | |     | |  | |__) |
// |  __  |  | |     | |  |  ___/
// | |  | |  | |     | |  | |
// |_|  |_|  |_|     |_|  |_|
//
// A wrapper around the actix test wrapper around the actix web client.
//
// Why? Just makes your tests a little less verbose. And we love writing lots of tests don't we!
//
pub mod http {
    use std::collections::HashMap;
    use serde_json::Value;
    use actix_http::Request;
    use actix_service::Service;
    use serde::{Serialize, de::DeserializeOwned};
    use actix_web::{body::MessageBody, dev::ServiceResponse, http::Method, test};

    pub struct HttpRequest {
        url: String,
        method: Method,
        body: Option<Vec<u8>>,
        headers: HashMap<String, String>,
    }

    impl HttpRequest {
        fn new(method: Method, url: String) -> Self {
            HttpRequest {
                url,
                body: None,
                method,
                headers: HashMap::new(),
            }
        }

        pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
            self.headers.insert(name.to_string(), value.to_string());
            self
        }

        ///
        /// Set a JSON body - and the content-type to go with it.
        ///
        pub fn body<T: Serialize>(&mut self, body: T) -> &mut Self {
            self.body = Some(serde_json::to_vec(&body).unwrap_or_else(|err| panic!("Cant set test body for {}: {}", self.url, err)));
            self.header("content-type", "application/json")
        }

        ///
        /// Set a body exactly as given - no content-type is added.
        ///
        pub fn raw_body(&mut self, body: &str) -> &mut Self {
            self.body = Some(body.as_bytes().to_vec());
            self
        }

        pub async fn send<S, B>(&mut self, app: &S) -> HttpResponse<B>
        where
            S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        {
            // Build an actix web test request.
            let mut req = test::TestRequest::default()
                .method(self.method.clone())
                .uri(&self.url);

            // Append all the specified headers.
            for (name, value) in &self.headers {
                req = req.insert_header((name.as_str(), value.as_str()));
            }

            if let Some(bytes) = &self.body {
                req = req.set_payload(bytes.clone());
            }

            let resp = test::call_service(app, req.to_request()).await;

            HttpResponse {
                url: self.url.clone(),
                method: self.method.clone(),
                inner: resp
            }
        }
    }

    pub struct HttpResponse<B> {
        url: String,     // The original request URL.
        method: Method,  // The original request HTTP method.
        inner: ServiceResponse<B>
    }

    impl <B> HttpResponse<B>
    where B: MessageBody
    {
        pub fn status(&self) -> u16 {
            self.inner.status().as_u16()
        }

        pub fn header(&self, name: &str) -> Option<String> {
            self.inner.headers()
                .get(name)
                .map(|value| value.to_str().expect("header wasn't text").to_string())
        }

        pub async fn read_body<T: DeserializeOwned>(self) -> T {
            let (url, method) = (self.url, self.method);
            let bytes = test::read_body(self.inner).await;
            serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("Failed to read json response for {} {}: {}", method, url, err))
        }

        pub async fn read_text(self) -> String {
            let bytes = test::read_body(self.inner).await;
            String::from_utf8(bytes.to_vec()).expect("response body wasn't utf-8")
        }

        ///
        /// The errorCode from a JSON error response.
        ///
        pub async fn error_code(self) -> u64 {
            let body: Value = self.read_body().await;
            body["errorCode"].as_u64().unwrap_or_else(|| panic!("No errorCode in {}", body))
        }
    }

    #[allow(dead_code)]
    pub fn post(url: &str) -> HttpRequest {
        HttpRequest::new(Method::POST, url.to_string())
    }

    #[allow(dead_code)]
    pub fn put(url: &str) -> HttpRequest {
        HttpRequest::new(Method::PUT, url.to_string())
    }

    #[allow(dead_code)]
    pub fn get(url: &str) -> HttpRequest {
        HttpRequest::new(Method::GET, url.to_string())
    }

    #[allow(dead_code)]
    pub fn delete(url: &str) -> HttpRequest {
        HttpRequest::new(Method::DELETE, url.to_string())
    }
}
