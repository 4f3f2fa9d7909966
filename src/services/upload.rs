//! HTTP service for uploading files to the backend.
//!
//! Uploads go out as JSON with the file contents base64-encoded as a data
//! URL, since JSON cannot carry binary data. The request itself uses
//! `XMLHttpRequest` rather than fetch because only XHR exposes upload
//! progress events.

use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ProgressEvent, XmlHttpRequest};

use crate::config::UPLOAD_ENDPOINT;
use crate::error::{UploadError, UploadResult};
use crate::types::{ApiError, UploadRequest};

/// Read a file into an upload request body.
///
/// The contents come back from the FileReader as a
/// `data:*/*;base64,`-prefixed data URL, which is what the endpoint expects.
pub async fn read_as_payload(file: web_sys::File) -> UploadResult<UploadRequest> {
    let name = file.name();
    let file = gloo_file::File::from(file);
    let contents = gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?;
    Ok(UploadRequest { name, contents })
}

/// POST an upload request to [`UPLOAD_ENDPOINT`].
///
/// `on_progress` is invoked with `(loaded, total)` for every upload progress
/// event; the browser guarantees `loaded` only ever grows. The future
/// resolves when the request reaches its terminal state, successful or not.
pub async fn send_upload(
    request: &UploadRequest,
    on_progress: impl Fn(f64, f64) + 'static,
) -> UploadResult<()> {
    let body = serde_json::to_string(request)?;

    let xhr = XmlHttpRequest::new().map_err(UploadError::browser)?;
    xhr.open_with_async("POST", UPLOAD_ENDPOINT, true)
        .map_err(UploadError::browser)?;
    xhr.set_request_header("Content-Type", "application/json")
        .map_err(UploadError::browser)?;

    // Bridge the readystatechange callback into a future. The sender lives
    // in an Option because the callback fires once per state, not once.
    let (tx, rx) = oneshot::channel::<(u16, Option<String>)>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onreadystatechange = {
        let xhr = xhr.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if xhr.ready_state() != XmlHttpRequest::DONE {
                return;
            }
            // A network failure surfaces here as status 0 with no body.
            let status = xhr.status().unwrap_or(0);
            let body = xhr.response_text().ok().flatten();
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send((status, body));
            }
        })
    };
    xhr.set_onreadystatechange(Some(onreadystatechange.as_ref().unchecked_ref()));

    let onprogress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        on_progress(event.loaded(), event.total());
    });
    xhr.upload()
        .map_err(UploadError::browser)?
        .set_onprogress(Some(onprogress.as_ref().unchecked_ref()));

    xhr.send_with_opt_str(Some(&body))
        .map_err(UploadError::browser)?;

    // The closures stay alive in this frame until the request completes.
    let (status, body) = rx
        .await
        .map_err(|_| UploadError::Network("request was dropped before completing".into()))?;

    classify_response(status, body.as_deref())
}

/// Map a terminal HTTP status onto the upload outcome.
///
/// 2xx is success. 4xx responses are expected to carry `{"error": string}`;
/// the detail is logged for developers but the caller still sees a failure.
/// Everything else, including status 0 from a dead connection, is a generic
/// failure.
fn classify_response(status: u16, body: Option<&str>) -> UploadResult<()> {
    match status {
        200..=299 => Ok(()),
        400..=499 => {
            let detail = body.and_then(parse_error_detail);
            if let Some(detail) = &detail {
                log::error!("Server rejected upload: {}", detail);
            }
            Err(UploadError::Rejected { status, detail })
        }
        0 => Err(UploadError::Network(
            "request failed before a response arrived".into(),
        )),
        _ => Err(UploadError::Http(status)),
    }
}

fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|payload| payload.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_is_success() {
        assert!(classify_response(200, None).is_ok());
        assert!(classify_response(204, None).is_ok());
        assert!(classify_response(299, Some("ignored")).is_ok());
    }

    #[test]
    fn test_4xx_carries_server_detail() {
        let result = classify_response(400, Some(r#"{"error": "not a data URL"}"#));
        match result {
            Err(UploadError::Rejected { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("not a data URL"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_4xx_with_unparseable_body_still_fails() {
        let result = classify_response(422, Some("<html>not json</html>"));
        match result {
            Err(UploadError::Rejected { status, detail }) => {
                assert_eq!(status, 422);
                assert!(detail.is_none());
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_5xx_is_a_generic_failure() {
        assert!(matches!(
            classify_response(500, Some(r#"{"error": "boom"}"#)),
            Err(UploadError::Http(500))
        ));
        assert!(matches!(
            classify_response(302, None),
            Err(UploadError::Http(302))
        ));
    }

    #[test]
    fn test_status_zero_is_a_network_failure() {
        assert!(matches!(
            classify_response(0, None),
            Err(UploadError::Network(_))
        ));
    }

    #[test]
    fn test_error_detail_parsing() {
        assert_eq!(
            parse_error_detail(r#"{"error": "bad request"}"#).as_deref(),
            Some("bad request")
        );
        assert!(parse_error_detail(r#"{"message": "wrong field"}"#).is_none());
        assert!(parse_error_detail("").is_none());
    }
}
