use serde_json::json;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;
use std::sync::Mutex;
use wiremock::matchers::method;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::Request;
use wiremock::Respond;
use wiremock::ResponseTemplate;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RegisteredKind {
    Mutation,
    Query,
}
impl RegisteredKind {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}

#[derive(Clone, Debug)]
struct RegisteredOperation {
    identifier: String,
    kind: RegisteredKind,
    response: Value,
    variables: Map<String, Value>,
}

#[derive(Clone, Debug)]
struct RegisteredError {
    extensions: Option<Value>,
    identifier: String,
    message: String,
    status: u16,
}

#[derive(Debug, Default)]
struct Registry {
    errors: Vec<RegisteredError>,
    operations: Vec<RegisteredOperation>,
}
impl Registry {
    fn respond(&self, body: &[u8]) -> ResponseTemplate {
        let request: Value = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(err) => return error_response(500, format!("invalid request body: {err}"), None),
        };
        let query = request["query"].as_str().unwrap_or_default().trim();
        let variables = request["variables"].as_object().cloned().unwrap_or_default();

        if let Some(error) = self.errors
            .iter()
            .find(|error| query.contains(error.identifier.as_str()))
        {
            return error_response(error.status, error.message.clone(), error.extensions.clone());
        }

        let operation = self.operations.iter().find(|operation| {
            query.starts_with(operation.kind.keyword())
                && query.contains(operation.identifier.as_str())
                && operation.variables == variables
        });
        match operation {
            Some(operation) => ResponseTemplate::new(200)
                .set_body_json(json!({ "data": operation.response })),
            None => error_response(404, "operation not found".to_string(), None),
        }
    }
}

fn error_response(status: u16, message: String, extensions: Option<Value>) -> ResponseTemplate {
    let mut error = json!({ "message": message });
    if let Some(extensions) = extensions {
        error["extensions"] = extensions;
    }
    ResponseTemplate::new(status).set_body_json(json!({
        "data": null,
        "errors": [error],
    }))
}

struct GraphQLResponder(Arc<Mutex<Registry>>);

impl Respond for GraphQLResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.0.lock().unwrap().respond(&request.body)
    }
}

/// A GraphQL server double. Operations are matched by an identifier that must
/// appear in the query text plus an exact variables map; anything unmatched
/// gets a 404 `operation not found` error.
pub struct MockGraphQLServer {
    registry: Arc<Mutex<Registry>>,
    server: MockServer,
}
impl MockGraphQLServer {
    pub async fn start() -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(GraphQLResponder(registry.clone()))
            .mount(&server)
            .await;

        Self { registry, server }
    }

    /// Starts a server preloaded with the CRUD operations of the `Entity`
    /// fixtures.
    pub async fn with_entity_operations() -> Self {
        let server = Self::start().await;
        let entity = entity_json("1");

        server.register_query("getEntity", json!({ "id": "1" }), json!({ "getEntity": entity }));
        server.register_mutation(
            "createEntity",
            json!({ "entity": { "fieldOne": "one", "fieldTwo": "two" } }),
            json!({ "createEntity": entity }),
        );
        server.register_mutation(
            "updateEntity",
            json!({ "id": "1", "entity": { "fieldOne": "uno" } }),
            json!({ "updateEntity": { "id": "1", "fieldOne": "uno", "fieldTwo": "two" } }),
        );
        server.register_mutation(
            "deleteEntity",
            json!({ "id": "1" }),
            json!({ "deleteEntity": true }),
        );
        server
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn register_query(&self, identifier: &str, variables: Value, response: Value) {
        self.register(RegisteredKind::Query, identifier, variables, response);
    }

    pub fn register_mutation(&self, identifier: &str, variables: Value, response: Value) {
        self.register(RegisteredKind::Mutation, identifier, variables, response);
    }

    /// Any operation whose text contains `identifier` gets an error response
    /// with `status`.
    pub fn register_error(
        &self,
        identifier: &str,
        status: u16,
        message: &str,
        extensions: Option<Value>,
    ) {
        self.registry.lock().unwrap().errors.push(RegisteredError {
            extensions,
            identifier: identifier.to_string(),
            message: message.to_string(),
            status,
        });
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    fn register(&self, kind: RegisteredKind, identifier: &str, variables: Value, response: Value) {
        let Value::Object(variables) = variables else {
            panic!("variables must be a JSON object");
        };
        self.registry.lock().unwrap().operations.push(RegisteredOperation {
            identifier: identifier.to_string(),
            kind,
            response,
            variables,
        });
    }
}

pub fn entity_json(id: &str) -> Value {
    json!({
        "id": id,
        "fieldOne": "one",
        "fieldTwo": "two",
        "createdAt": "2024-01-01T00:00:00Z",
        "modifiedAt": "2024-01-02T00:00:00Z",
    })
}
