//! Embedded dashboard page. Polls `/data` once a second and drives the
//! start/stop controls; no build step, Chart.js from CDN.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>pocket-quant</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        :root {
            --bg: #0a0a0a;
            --surface: #141414;
            --border: #222;
            --text: #e0e0e0;
            --dim: #666;
            --green: #00cc77;
            --red: #ff4455;
        }
        body {
            font-family: ui-monospace, 'SF Mono', Menlo, monospace;
            background: var(--bg);
            color: var(--text);
            padding: 24px;
        }
        header {
            display: flex;
            align-items: center;
            gap: 16px;
            margin-bottom: 20px;
        }
        h1 { font-size: 14px; letter-spacing: 2px; color: var(--dim); text-transform: uppercase; }
        .status { font-size: 12px; padding: 4px 10px; border: 1px solid var(--border); }
        .status.running { color: var(--green); border-color: var(--green); }
        .status.stopped { color: var(--dim); }
        .price { font-size: 24px; font-weight: 600; margin-left: auto; font-variant-numeric: tabular-nums; }
        button {
            font: inherit;
            font-size: 12px;
            padding: 6px 16px;
            background: var(--surface);
            color: var(--text);
            border: 1px solid var(--border);
            cursor: pointer;
        }
        button:hover { border-color: var(--dim); }
        .layout { display: grid; grid-template-columns: 1fr 280px; gap: 16px; }
        .panel { background: var(--surface); border: 1px solid var(--border); padding: 16px; }
        .panel h2 { font-size: 11px; color: var(--dim); text-transform: uppercase; margin-bottom: 12px; }
        #chart-wrap { height: 360px; position: relative; }
        .trade { display: flex; justify-content: space-between; font-size: 12px; padding: 6px 0; border-bottom: 1px solid var(--border); }
        .trade .dir { font-weight: 600; text-transform: uppercase; }
        .trade .dir.up { color: var(--green); }
        .trade .dir.down { color: var(--red); }
        #error { color: var(--red); font-size: 12px; margin-top: 12px; display: none; }
    </style>
</head>
<body>
    <header>
        <h1>pocket-quant</h1>
        <span class="status stopped" id="status">stopped</span>
        <button id="start-btn">Start</button>
        <button id="stop-btn">Stop</button>
        <span class="price" id="price">—</span>
    </header>
    <div class="layout">
        <div class="panel">
            <h2>Price / EMA(fast) / EMA(slow)</h2>
            <div id="chart-wrap"><canvas id="chart"></canvas></div>
        </div>
        <div class="panel">
            <h2>Signals</h2>
            <div id="trades"><div style="color:var(--dim);font-size:12px;">No signals yet</div></div>
            <div id="error"></div>
        </div>
    </div>

    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <script>
        let chart;

        function initChart() {
            const ctx = document.getElementById('chart').getContext('2d');
            chart = new Chart(ctx, {
                type: 'line',
                data: {
                    labels: [],
                    datasets: [
                        { label: 'price', data: [], borderColor: '#e0e0e0', borderWidth: 1.5, pointRadius: 0 },
                        { label: 'fast', data: [], borderColor: '#00cc77', borderWidth: 1, pointRadius: 0 },
                        { label: 'slow', data: [], borderColor: '#ff4455', borderWidth: 1, pointRadius: 0 }
                    ]
                },
                options: {
                    responsive: true,
                    maintainAspectRatio: false,
                    animation: false,
                    plugins: { legend: { labels: { color: '#666', font: { size: 10 } } } },
                    scales: {
                        x: { ticks: { display: false }, grid: { display: false } },
                        y: { ticks: { color: '#666', font: { size: 10 } }, grid: { color: '#1a1a1a' } }
                    }
                }
            });
        }

        // zero is the "undefined" sentinel for EMA values; hide those points
        function maskSentinel(values) {
            return values.map(v => v === 0 ? null : v);
        }

        async function refresh() {
            try {
                const res = await fetch('/data');
                const d = await res.json();

                const status = document.getElementById('status');
                status.textContent = d.running ? 'running' : 'stopped';
                status.className = 'status ' + (d.running ? 'running' : 'stopped');

                document.getElementById('price').textContent =
                    d.current_price != null ? d.current_price.toFixed(4) : '—';

                chart.data.labels = d.labels;
                chart.data.datasets[0].data = d.prices;
                chart.data.datasets[1].data = maskSentinel(d.fast_emas);
                chart.data.datasets[2].data = maskSentinel(d.slow_emas);
                chart.update('none');

                const trades = document.getElementById('trades');
                if (d.trades.length > 0) {
                    trades.innerHTML = d.trades.slice().reverse().map(t => `
                        <div class="trade">
                            <span class="dir ${t.direction}">${t.direction}</span>
                            <span>${t.price.toFixed(4)}</span>
                            <span style="color:var(--dim)">${new Date(t.at_ms).toLocaleTimeString()}</span>
                        </div>
                    `).join('');
                }

                const errEl = document.getElementById('error');
                if (d.last_error) {
                    errEl.textContent = `[${d.last_error.kind}] ${d.last_error.message}`;
                    errEl.style.display = 'block';
                } else {
                    errEl.style.display = 'none';
                }
            } catch (e) {
                console.error('refresh failed:', e);
            }
        }

        document.getElementById('start-btn').onclick = () => fetch('/start', { method: 'POST' });
        document.getElementById('stop-btn').onclick = () => fetch('/stop', { method: 'POST' });

        initChart();
        refresh();
        setInterval(refresh, 1000);
    </script>
</body>
</html>
"##;
