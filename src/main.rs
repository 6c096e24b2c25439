// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod backend;
mod config;
mod state;
mod task;
mod themes;
mod ui;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(windows)]
use windows::Win32::Foundation::HANDLE;
#[cfg(windows)]
use windows::Win32::System::Threading::CreateMutexW;
#[cfg(windows)]
use windows::core::PCWSTR;

/// Single instance enforcement using a Windows named mutex.
/// Returns a handle that must be kept alive for the duration of the app.
#[cfg(windows)]
fn acquire_single_instance() -> Option<HANDLE> {
    use windows::Win32::Foundation::ERROR_ALREADY_EXISTS;
    use windows::Win32::Foundation::GetLastError;

    let mutex_name: Vec<u16> = "Global\\CursorWeave\0".encode_utf16().collect();

    unsafe {
        let handle = CreateMutexW(None, false, PCWSTR(mutex_name.as_ptr())).ok()?;

        // Check if another instance already owns this mutex
        if GetLastError() == ERROR_ALREADY_EXISTS {
            tracing::warn!("Another instance of CursorWeave is already running");
            return None;
        }

        Some(handle)
    }
}

#[cfg(not(windows))]
fn acquire_single_instance() -> Option<()> {
    Some(()) // No-op on non-Windows platforms
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "cursorweave=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CursorWeave");

    // Enforce single instance
    let _instance_lock = match acquire_single_instance() {
        Some(lock) => lock,
        None => {
            tracing::error!("CursorWeave is already running. Exiting.");
            #[cfg(windows)]
            {
                use windows::Win32::UI::WindowsAndMessaging::{
                    MB_ICONINFORMATION, MB_OK, MessageBoxW,
                };
                let title: Vec<u16> = "CursorWeave\0".encode_utf16().collect();
                let msg: Vec<u16> = "CursorWeave is already running.\0".encode_utf16().collect();
                unsafe {
                    MessageBoxW(
                        None,
                        PCWSTR(msg.as_ptr()),
                        PCWSTR(title.as_ptr()),
                        MB_OK | MB_ICONINFORMATION,
                    );
                }
            }
            return Ok(());
        }
    };

    // Configure native options
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([540.0, 660.0])
        .with_min_inner_size([420.0, 480.0])
        .with_title("CursorWeave");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CursorWeave",
        native_options,
        Box::new(|cc| Ok(Box::new(app::CursorWeaveApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
