//! JSON bodies shaped like real Graylog2 API responses

use serde_json::json;

/// `/system` body
pub fn system_json(is_processing: bool, lifecycle: &str, lb_status: &str) -> String {
    json!({
        "facility": "graylog-server",
        "codename": "Noir",
        "node_id": "5ca1ab1e-0000-4000-8000-000000000000",
        "cluster_id": "c0ffee00-0000-4000-8000-000000000000",
        "version": "2.4.6+ceaa7e4",
        "started_at": "2026-10-01T08:00:00.000Z",
        "is_processing": is_processing,
        "hostname": "graylog01",
        "lifecycle": lifecycle,
        "lb_status": lb_status,
        "timezone": "UTC",
        "operating_system": "Linux 5.15.0"
    })
    .to_string()
}

/// Body with a single `total` count (`/system/indexer/failures`, `/system/inputs`)
pub fn count_json(total: u64) -> String {
    json!({ "total": total }).to_string()
}

/// `/system/throughput` body
pub fn throughput_json(throughput: u64) -> String {
    json!({ "throughput": throughput }).to_string()
}

/// `/count/total` body
pub fn total_json(events: u64) -> String {
    json!({ "events": events }).to_string()
}

/// Collector listing; each entry is `(active, status code)`
pub fn collectors_json(collectors: &[(bool, i64)]) -> String {
    let entries: Vec<_> = collectors
        .iter()
        .enumerate()
        .map(|(idx, (active, status))| {
            json!({
                "id": format!("collector-{idx}"),
                "node_id": format!("web-{idx:02}"),
                "collector_version": "0.1.8",
                "active": active,
                "last_seen": "2026-10-14T09:59:30.000Z",
                "node_details": {
                    "operating_system": "Linux",
                    "status": {
                        "status": status,
                        "message": "",
                        "backends": {}
                    }
                }
            })
        })
        .collect();
    let total = entries.len();

    json!({ "collectors": entries, "total": total }).to_string()
}

/// `count` active collectors, all running
pub fn healthy_collectors(count: usize) -> String {
    collectors_json(&vec![(true, 0); count])
}
