//! Console host driven from scripted input.

use voltshell_cli::handlers::run::drive;
use voltshell_cli::presentation::ConsoleSurface;
use voltshell_core::{NetworkAvailability, ShellSettings};
use voltshell_runtime::bootstrap;

fn offline_settings() -> ShellSettings {
    ShellSettings {
        remote_url: "http://127.0.0.1:1/".to_string(),
        probe_timeout_ms: 200,
        network_override: Some(NetworkAvailability::Unavailable),
        ..Default::default()
    }
}

#[tokio::test]
async fn scripted_session_prints_loads_and_replies() {
    let ctx = bootstrap(offline_settings()).unwrap();
    let (handle, shell) = ctx.launch(ConsoleSurface::new(Vec::new()));

    let script: &[u8] = b"frobnicate\n\
        bridge {\"version\":1,\"id\":1,\"call\":{\"op\":\"showToast\",\"message\":\"Saved\"}}\n\
        bridge {\"version\":9,\"id\":2,\"call\":{\"op\":\"showToast\",\"message\":\"x\"}}\n\
        quit\n\
        activate\n";

    let mut replies = Vec::new();
    let input = async {
        drive(&handle, script, &mut replies).await.unwrap();
        handle.shutdown().unwrap();
    };

    let (surface, ()) = tokio::join!(shell.run(), input);

    let replies = String::from_utf8(replies).unwrap();
    let lines: Vec<&str> = replies.lines().collect();
    assert_eq!(lines.len(), 3, "{replies}");
    assert!(lines[0].starts_with("error Invalid arguments: unknown command"));
    assert_eq!(lines[1], r#"reply {"status":"ok","id":1}"#);
    assert!(lines[2].starts_with(r#"reply {"status":"error","id":2"#));

    let screen = String::from_utf8(surface.into_inner()).unwrap();
    assert!(screen.contains("notice Saved\n"), "{screen}");
}

#[tokio::test]
async fn offline_activation_loads_offline_page() {
    let ctx = bootstrap(offline_settings()).unwrap();
    let mut events = ctx.events.subscribe();
    let (handle, shell) = ctx.launch(ConsoleSurface::new(Vec::new()));

    let input = async {
        loop {
            let event = events.recv().await.unwrap();
            if event.event_type() == "source_resolved" {
                break;
            }
        }
        handle.shutdown().unwrap();
    };

    let (surface, ()) = tokio::join!(shell.run(), input);
    let screen = String::from_utf8(surface.into_inner()).unwrap();
    assert_eq!(
        screen,
        "load offline(offline.html)\nnotice No network connection. Using offline mode.\n"
    );
}
