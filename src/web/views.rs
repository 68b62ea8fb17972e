use axum::response::Html;
use leptos::prelude::*;

use crate::timegrid::{DAY_COUNT, GRID_SIZE, SLOTS_PER_DAY};

const STYLE: &str = include_str!("../style.css");

pub(crate) async fn home() -> Html<String> {
    Html(render_home())
}

fn render_home() -> String {
    let grid_note = format!(
        "Availability uses a fixed weekly grid: {DAY_COUNT} days of {SLOTS_PER_DAY} \
         half-hour slots between 08:00 and 20:00 ({GRID_SIZE} slots in total). \
         Slot tokens look like 0-0800-0830 (day, start, end)."
    );

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"groupmatch"</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <h1>"groupmatch"</h1>
                <p>
                    "Create a section, share its passcode with your class, and find \
                     the classmates whose free time lines up with yours."
                </p>
                <section>
                    <h2>"How it works"</h2>
                    <ol>
                        <li>"An instructor creates a section and gets a short passcode."</li>
                        <li>"Students join with the passcode and their weekly availability."</li>
                        <li>
                            "Any student asks for a ranking: total shared half-hours \
                             (cumulative) or the longest unbroken shared run (consecutive)."
                        </li>
                    </ol>
                    <p class="grid-note">{grid_note}</p>
                </section>
                <section>
                    <h2>"API"</h2>
                    <table>
                        <thead>
                            <tr><th>"Method"</th><th>"Path"</th><th>"Purpose"</th></tr>
                        </thead>
                        <tbody>
                            <tr><td>"POST"</td><td>"/api/sections"</td><td>"create a section, returns a passcode"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}"</td><td>"section details"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}/verify"</td><td>"check a passcode"</td></tr>
                            <tr><td>"POST"</td><td>"/api/sections/{passcode}/students"</td><td>"join with a schedule, returns your position"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}/students?before=N"</td><td>"names of earlier members"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}/students/{id}/schedule"</td><td>"view a schedule"</td></tr>
                            <tr><td>"PUT"</td><td>"/api/sections/{passcode}/students/{id}/schedule"</td><td>"replace a schedule"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}/students/{id}/group_cumulative"</td><td>"ranking by total overlap"</td></tr>
                            <tr><td>"GET"</td><td>"/api/sections/{passcode}/students/{id}/group_consecutive"</td><td>"ranking by longest shared run"</td></tr>
                        </tbody>
                    </table>
                </section>
            </body>
        </html>
    }
    .to_html()
}
