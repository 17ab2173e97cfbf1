//! 终端 / 系统深浅色检测

#[cfg(target_os = "macos")]
use std::process::Command;

/// 检测当前是否为深色背景
///
/// 返回 `true` 表示深色模式，`false` 表示浅色模式
pub fn detect_system_theme() -> bool {
    // 多数终端通过 COLORFGBG 暴露 "前景;背景"，背景 0-6 或 8 为深色
    if let Ok(value) = std::env::var("COLORFGBG") {
        if let Some(dark) = parse_colorfgbg(&value) {
            return dark;
        }
    }

    platform_dark_mode()
}

/// macOS: AppleInterfaceStyle 存在且为 "Dark" 则为深色模式，不存在则为浅色
#[cfg(target_os = "macos")]
fn platform_dark_mode() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// 其他平台无法判断，按深色终端处理
#[cfg(not(target_os = "macos"))]
fn platform_dark_mode() -> bool {
    true
}

fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}
