//! Speech Recognition Commands
//!
//! Single-utterance dictation through `SpeechRecognition`, falling back to the
//! prefixed `webkitSpeechRecognition` constructor.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::window::browser_window;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition is not available")]
    Unsupported,
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

fn recognition_constructor() -> Option<js_sys::Function> {
    let window: JsValue = browser_window().ok()?.into();
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .filter_map(|name| js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok())
        .find(|ctor| ctor.is_function())
        .map(|ctor| ctor.unchecked_into())
}

/// Start one dictation session.
///
/// `on_result` receives the final transcript, `on_error` a short reason, and
/// `on_end` fires when the session closes for any reason.
pub fn start_dictation(
    on_result: impl Fn(String) + 'static,
    on_error: impl Fn(String) + 'static,
    on_end: impl Fn() + 'static,
) -> Result<(), SpeechError> {
    let ctor = recognition_constructor().ok_or(SpeechError::Unsupported)?;
    let recognition: web_sys::SpeechRecognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .map_err(|e| SpeechError::Start(format!("{:?}", e)))?
        .unchecked_into();

    recognition.set_continuous(false);
    recognition.set_interim_results(false);
    recognition.set_lang("en-US");

    let on_result = Closure::<dyn FnMut(web_sys::SpeechRecognitionEvent)>::new(
        move |ev: web_sys::SpeechRecognitionEvent| {
            let transcript = ev
                .results()
                .and_then(|results| results.get(0))
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            if let Some(transcript) = transcript {
                on_result(transcript);
            }
        },
    );
    let on_error = Closure::<dyn FnMut(web_sys::SpeechRecognitionError)>::new(
        move |ev: web_sys::SpeechRecognitionError| {
            on_error(format!("{:?}", ev.error()));
        },
    );
    let on_end = Closure::<dyn FnMut()>::new(move || on_end());

    recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

    // The recognizer outlives this call; its handlers must too
    on_result.forget();
    on_error.forget();
    on_end.forget();

    recognition
        .start()
        .map_err(|e| SpeechError::Start(format!("{:?}", e)))
}
