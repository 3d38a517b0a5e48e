const PROBE_SCRIPT: &str = r#"return typeof htmlToImage !== "undefined";"#;

pub(super) fn probe_script() -> &'static str {
    PROBE_SCRIPT
}

pub(super) fn render_script(target_id: &str, options_json: &str) -> String {
    format!(
        r#"const node = document.getElementById({target_id:?});
        if (!node) {{
            return {{ status: "missing" }};
        }}
        if (typeof htmlToImage === "undefined") {{
            return {{ status: "unavailable" }};
        }}
        try {{
            const dataUrl = await htmlToImage.toPng(node, {options_json});
            return {{ status: "ok", dataUrl }};
        }} catch (err) {{
            console.error("report snapshot failed", err);
            return {{ status: "error", message: String(err) }};
        }}"#,
    )
}

pub(super) fn download_script(file_name: &str, data_url: &str) -> String {
    format!(
        r#"const link = document.createElement("a");
        if (!("download" in link)) {{
            return false;
        }}
        link.download = {file_name:?};
        link.href = {data_url:?};
        document.body.appendChild(link);
        const accepted = link.dispatchEvent(
            new MouseEvent("click", {{ bubbles: true, cancelable: true }})
        );
        link.remove();
        return accepted;"#,
    )
}

pub(super) fn alert_script(message: &str) -> String {
    format!("window.alert({message:?});")
}
