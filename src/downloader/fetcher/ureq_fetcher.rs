use ureq::Error::{Status, Transport};

use super::{FileDownloader, Response};

use std::io::Read;

/// Blocking fetcher on a default `ureq` agent. No timeout is configured.
pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mut body = Vec::new();

                if response.into_reader().read_to_end(&mut body).is_err() {
                    return Response::invalid_body();
                }

                Response::ok(body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
