//! Turns the session into what should be on screen, without touching the terminal.
//!
//! A [`Frame`] is a status bar on the first row and one boxed panel centered in
//! the rest. The panel holds the interface list, the address list, the live
//! results or a popup, depending on the session.

use sweepr_common::network::host::DiscoveredHost;
use sweepr_common::network::interface::Interface;
use sweepr_core::session::{Session, Stage};
use unicode_width::UnicodeWidthStr;

pub const QUIT_HINT: &str = " Press `q` or `ctrl+c` to quit. ";

/// Rows taken by the status bar, the box borders and the margin around the results.
const RESULT_CHROME_ROWS: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub lines: Vec<Line>,
    /// Inner width in columns, every line is padded to it.
    pub width: usize,
    pub left: u16,
    pub top: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    pub status: String,
    pub panel: Panel,
}

pub fn render(session: &Session, cols: u16, rows: u16) -> Frame {
    let lines = match session.popup() {
        Some(msg) => vec![plain(format!(" {msg} "))],
        None => match session.stage() {
            Stage::SelectInterface => selectable(session.interfaces().iter().map(interface_row), session.cursor()),
            Stage::SelectAddress => {
                selectable(session.addresses().iter().map(|net| format!(" {:>42} ", net.to_string())), session.cursor())
            }
            Stage::Scanning => result_rows(session, rows),
        },
    };

    Frame {
        cols,
        rows,
        status: status_bar(session, cols),
        panel: layout(lines, cols, rows),
    }
}

fn interface_row(intf: &Interface) -> String {
    let mac = intf.mac.map(|m| m.to_string()).unwrap_or_default();
    let mtu = intf.mtu.map(|m| m.to_string()).unwrap_or_default();
    format!(" {:>10} {:>17} {:>5} ", intf.name, mac, mtu)
}

fn result_row(host: &DiscoveredHost) -> String {
    format!(" {:<15} {:>17} {} ", host.ip.to_string(), host.mac.to_string(), host.vendor_or_empty())
}

/// Newest first, one row per host, blank rows below so the box keeps its size.
fn result_rows(session: &Session, rows: u16) -> Vec<Line> {
    let visible = usize::from(rows.saturating_sub(RESULT_CHROME_ROWS));
    let mut lines: Vec<Line> = session
        .results()
        .into_iter()
        .flat_map(|results| results.newest_first())
        .take(visible)
        .map(|host| plain(result_row(host)))
        .collect();
    lines.resize_with(visible, || plain(String::new()));
    lines
}

fn status_bar(session: &Session, cols: u16) -> String {
    let mut text = QUIT_HINT.to_string();
    if let (Some(scan), None) = (session.scan(), session.popup()) {
        text.push_str(&format!(
            "| {} probed, {} found on {} ",
            scan.report().sent,
            scan.results().len(),
            scan.address_space().network()
        ));
    }
    pad(text, usize::from(cols))
}

fn layout(lines: Vec<Line>, cols: u16, rows: u16) -> Panel {
    let width = lines.iter().map(|l| l.text.width()).max().unwrap_or(0);
    let lines: Vec<Line> = lines
        .into_iter()
        .map(|l| Line {
            text: pad(l.text, width),
            selected: l.selected,
        })
        .collect();

    let box_width = u16::try_from(width + 2).unwrap_or(u16::MAX);
    let box_height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = rows.saturating_sub(1);

    Panel {
        left: cols.saturating_sub(box_width) / 2,
        top: 1 + area.saturating_sub(box_height) / 2,
        width,
        lines,
    }
}

fn selectable(rows: impl Iterator<Item = String>, cursor: usize) -> Vec<Line> {
    rows.enumerate()
        .map(|(i, text)| Line { text, selected: i == cursor })
        .collect()
}

fn plain(text: String) -> Line {
    Line { text, selected: false }
}

fn pad(mut text: String, width: usize) -> String {
    let current = text.width();
    if current < width {
        text.push_str(&" ".repeat(width - current));
    }
    text
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
