//! Static landing page.
//!
//! Plain HTML plus vega-embed from a CDN; the page holds the selection
//! state (file, range, series toggles) and re-fetches the derived chart on
//! every control change.

pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>XCO2 View</title>
<script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
<script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
<script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
<style>
  body { font-family: sans-serif; margin: 2rem auto; max-width: 64rem; }
  #controls { display: flex; flex-wrap: wrap; gap: 1rem; align-items: end; margin-bottom: 1rem; }
  #controls label { display: block; font-size: 0.8rem; color: #444; }
  #chart { width: 100%; }
  #message { color: #a33; margin: 0.5rem 0; }
  table { border-collapse: collapse; font-size: 0.85rem; }
  td, th { border: 1px solid #ccc; padding: 0.15rem 0.5rem; }
</style>
</head>
<body>
<h1 id="title">XCO2 View</h1>
<p>Select a data file and set plot parameters to compare the local series
against the global baseline.</p>
<div id="controls">
  <div><label for="file">Data file</label><select id="file"></select></div>
  <div><label for="start">From</label><input type="date" id="start"></div>
  <div><label for="end">To</label><input type="date" id="end"></div>
  <div><label><input type="checkbox" id="primary" checked> primary</label></div>
  <div><label><input type="checkbox" id="baseline" checked> baseline</label></div>
  <div><label><input type="checkbox" id="raw"> show raw data</label></div>
</div>
<div id="message"></div>
<div id="chart"></div>
<div id="table"></div>
<script>
const el = id => document.getElementById(id);

async function fetchJson(url) {
  const resp = await fetch(url);
  const body = await resp.json();
  if (!resp.ok) throw new Error(body.message || resp.statusText);
  return body;
}

async function loadCatalog() {
  const catalog = await fetchJson('/v1/files');
  el('title').textContent = catalog.title;
  document.title = catalog.title;
  if (catalog.files.length === 0) {
    el('message').textContent = 'No data files available.';
    return;
  }
  for (const file of catalog.files) {
    const option = document.createElement('option');
    option.value = option.textContent = file;
    el('file').appendChild(option);
  }
  await refresh(true);
}

async function refresh(resetRange) {
  const file = el('file').value;
  if (!file) return;
  el('message').textContent = '';
  try {
    const params = new URLSearchParams({
      primary: el('primary').checked,
      baseline: el('baseline').checked,
    });
    if (!resetRange && el('start').value) params.set('start', el('start').value);
    if (!resetRange && el('end').value) params.set('end', el('end').value);

    const view = await fetchJson(`/v1/files/${encodeURIComponent(file)}/chart?${params}`);
    if (resetRange) {
      el('start').value = view.first_day || '';
      el('end').value = view.last_day || '';
    }
    el('message').textContent = view.warnings.join(' ');
    await vegaEmbed('#chart', view.chart, {actions: false});
    await refreshTable(file);
  } catch (err) {
    el('message').textContent = err.message;
  }
}

async function refreshTable(file) {
  const container = el('table');
  container.innerHTML = '';
  if (!el('raw').checked) return;
  const table = await fetchJson(`/v1/files/${encodeURIComponent(file)}/table?limit=500`);
  const rows = table.points.map(p =>
    `<tr><td>${p.timestamp}</td><td>${p.value.toFixed(2)}</td></tr>`).join('');
  container.innerHTML =
    `<h2>Raw data</h2><table><tr><th>timestamp</th><th>xco2 [ppm]</th></tr>${rows}</table>`;
}

el('file').addEventListener('change', () => refresh(true));
for (const id of ['start', 'end', 'primary', 'baseline', 'raw']) {
  el(id).addEventListener('change', () => refresh(false));
}
loadCatalog().catch(err => { el('message').textContent = err.message; });
</script>
</body>
</html>
"#;
