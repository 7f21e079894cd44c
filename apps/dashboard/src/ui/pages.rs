// Page templates served as-is. Plotly draws the chart specifications
// returned by /api/v1/workforce/dashboard.

pub const WORKFORCE_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Industry Workforce Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { margin: 0; font-family: system-ui, sans-serif; display: flex; }
  aside { width: 260px; padding: 1rem; background: #f3f4f6; min-height: 100vh; }
  main { flex: 1; padding: 1rem 2rem; }
  select { width: 100%; min-height: 8rem; }
  .metrics { display: flex; gap: 2rem; }
  .metric b { display: block; font-size: 1.6rem; }
  .error { color: #b91c1c; font-weight: bold; }
</style>
</head>
<body>
<aside>
  <h2>Filters</h2>
  <label>Select Geographies<select id="geos" multiple></select></label>
  <label>Select Industries<select id="inds" multiple></select></label>
  <p><a href="/hr">HR analytics upload</a></p>
</aside>
<main>
  <h1>Industry Workforce Dashboard</h1>
  <div id="error" class="error"></div>
  <div id="content">
    <h2>Workers by Industry and Geography</h2>
    <div id="bar"></div>
    <h2>Facts &amp; Figures</h2>
    <p><b>Regions included:</b> <span id="regions"></span></p>
    <p><b>Business categories:</b> <span id="categories"></span></p>
    <div class="metrics">
      <div class="metric">Total Workers<b id="total"></b></div>
      <div class="metric">Largest Employment Sector<b id="sector"></b></div>
      <div class="metric">Top Geography by Workforce<b id="geo"></b></div>
    </div>
    <h3>Sectoral Worker Distribution</h3>
    <div id="pie"></div>
    <button id="download">Download Filtered Data</button>
  </div>
</main>
<script>
const $ = (id) => document.getElementById(id);

function fail(message) {
  $("error").textContent = message;
  $("content").style.display = "none";
}

function clearError() {
  $("error").textContent = "";
  $("content").style.display = "";
}

async function call(path, body) {
  const res = await fetch(path, body === undefined ? {} : {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify(body),
  });
  if (!res.ok) {
    const err = await res.json().catch(() => ({ error: { message: res.statusText } }));
    throw new Error(err.error.message);
  }
  return res;
}

function fill(select, values) {
  select.innerHTML = "";
  for (const v of values) select.add(new Option(v, v, true, true));
}

function selection() {
  const chosen = (s) => Array.from(s.selectedOptions, (o) => o.value);
  return { geographies: chosen($("geos")), industries: chosen($("inds")) };
}

async function refresh() {
  clearError();
  try {
    const view = await (await call("/api/v1/workforce/dashboard", selection())).json();
    const bar = view.bar_chart;
    Plotly.react("bar", bar.series.map((s) => ({ type: "bar", name: s.name, x: s.x, y: s.y })), {
      title: bar.title, barmode: bar.barmode,
      xaxis: { title: bar.x_label }, yaxis: { title: bar.y_label },
      legend: { title: { text: bar.legend_title } },
    }, { responsive: true });
    const pie = view.pie_chart;
    Plotly.react("pie", [{ type: "pie", labels: pie.labels, values: pie.values }],
      { title: pie.title }, { responsive: true });
    $("regions").textContent = view.selection.geographies.join(", ");
    $("categories").textContent = view.selection.industries.join(", ");
    $("total").textContent = view.metrics.total_workers;
    $("sector").textContent = view.metrics.largest_sector ?? "-";
    $("geo").textContent = view.metrics.top_geography ?? "-";
  } catch (e) {
    fail(e.message);
  }
}

$("download").onclick = async () => {
  try {
    const blob = await (await call("/api/v1/workforce/export", selection())).blob();
    const link = document.createElement("a");
    link.href = URL.createObjectURL(blob);
    link.download = "filtered_data.csv";
    link.click();
    URL.revokeObjectURL(link.href);
  } catch (e) {
    fail(e.message);
  }
};

(async () => {
  try {
    const options = await (await call("/api/v1/workforce/filters")).json();
    fill($("geos"), options.geographies);
    fill($("inds"), options.industries);
    $("geos").onchange = refresh;
    $("inds").onchange = refresh;
    await refresh();
  } catch (e) {
    fail(e.message);
  }
})();
</script>
</body>
</html>
"#;

pub const HR_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Intelligent HR Analytics Dashboard</title>
<style>
  body { margin: 0; font-family: system-ui, sans-serif; display: flex; }
  aside { width: 260px; padding: 1rem; background: #f3f4f6; min-height: 100vh; }
  main { flex: 1; padding: 1rem 2rem; overflow-x: auto; }
  .success { color: #15803d; } .error { color: #b91c1c; } .info { color: #1d4ed8; }
  table { border-collapse: collapse; font-size: 0.85rem; }
  th, td { border: 1px solid #d1d5db; padding: 0.25rem 0.5rem; text-align: left; }
</style>
</head>
<body>
<aside>
  <h2>Upload CSV / Excel File</h2>
  <input id="file" type="file" accept=".csv,.xlsx,.xls">
  <p id="status" class="info">Upload a CSV or Excel file to begin analysis</p>
  <p><a href="/">Workforce dashboard</a></p>
</aside>
<main>
  <h1>Intelligent HR Analytics Dashboard</h1>
  <div id="preview"><p class="info">Please upload a CSV or Excel file to begin.</p></div>
</main>
<script>
const $ = (id) => document.getElementById(id);

function render(table) {
  const preview = $("preview");
  preview.innerHTML = "";
  if (table.rows.length === 0 || table.columns.length === 0) {
    preview.innerHTML = '<p class="info">Please upload a CSV or Excel file to begin.</p>';
    return;
  }
  const heading = document.createElement("h3");
  heading.textContent = "Preview of Uploaded Data";
  const grid = document.createElement("table");
  const head = grid.createTHead().insertRow();
  for (const c of table.columns) head.appendChild(document.createElement("th")).textContent = c;
  const body = grid.createTBody();
  for (const row of table.rows) {
    const tr = body.insertRow();
    for (const cell of row) tr.insertCell().textContent = cell;
  }
  preview.append(heading, grid);
}

$("file").onchange = async () => {
  const form = new FormData();
  if ($("file").files.length) form.append("file", $("file").files[0]);
  const res = await fetch("/api/v1/hr/upload", { method: "POST", body: form });
  const body = await res.json();
  if (!res.ok) {
    $("status").className = "error";
    $("status").textContent = body.error.message;
    render({ columns: [], rows: [] });
    return;
  }
  $("status").className = body.status.kind;
  $("status").textContent = body.status.message;
  render(body.is_empty ? { columns: [], rows: [] } : body.table);
};
</script>
</body>
</html>
"#;
