// Inline assets shipped with every page.

/// Runs before first paint so reveal targets start hidden only when the
/// script that reveals them will run.
pub(super) const ENABLE_JS: &str = r#"document.documentElement.classList.add("js");"#;

pub(super) const SCRIPT: &str = r#"
(() => {
  const targets = document.querySelectorAll("[data-reveal]");
  if ("IntersectionObserver" in window) {
    const observer = new IntersectionObserver((entries) => {
      for (const entry of entries) {
        if (entry.isIntersecting) {
          entry.target.classList.add("revealed");
          observer.unobserve(entry.target);
        }
      }
    }, { threshold: 0.1 });
    targets.forEach((el) => observer.observe(el));
  } else {
    targets.forEach((el) => el.classList.add("revealed"));
  }

  document.querySelectorAll(".toast[data-dismiss-ms]").forEach((toast) => {
    setTimeout(() => toast.remove(), Number(toast.dataset.dismissMs));
  });

  const form = document.getElementById("contact-form");
  if (form) {
    form.addEventListener("submit", (event) => {
      if (form.dataset.sending === "true") {
        event.preventDefault();
        return;
      }
      form.dataset.sending = "true";
      const button = form.querySelector("button[type=submit]");
      button.disabled = true;
      button.querySelector(".label").textContent = "Sending...";
    });
  }
})();
"#;

pub(super) const STYLES: &str = r#"
:root {
  --bg: #f9fafb; --fg: #111827; --muted: #6b7280; --card: #ffffff;
  --border: #d1d5db; --accent: #3b82f6; --danger: #ef4444;
}
[data-theme="dark"] {
  --bg: #0f172a; --fg: #f1f5f9; --muted: #94a3b8; --card: #1e293b;
  --border: #334155; --accent: #60a5fa; --danger: #f87171;
}
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; min-height: 100vh; display: flex; flex-direction: column;
  font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
main { flex: 1; }
a { color: inherit; }
.container { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; }
.site-header { display: flex; justify-content: space-between; align-items: center;
  padding: 1rem 1.5rem; background: var(--card); box-shadow: 0 1px 4px rgba(0,0,0,.08); }
.brand { font-weight: 700; font-size: 1.5rem; }
.site-nav a { margin-left: 1rem; text-decoration: none; }
.site-nav a:hover { color: var(--muted); }
.section { padding: 3rem 0; }
.section-title { text-align: center; font-size: 1.875rem; font-weight: 600; margin-bottom: 2.5rem; }
.about-card { display: flex; gap: 1.5rem; align-items: center; border-radius: 1rem;
  padding: 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.about-text { flex: 1; }
.about-text h1 { font-size: 2.25rem; margin: 0 0 1rem; }
.summary { font-size: 1.125rem; color: var(--muted); }
.headshot { flex: 1; position: relative; height: 400px; border-radius: 1rem; overflow: hidden; }
.headshot .skeleton { position: absolute; inset: 0; background: var(--border);
  animation: pulse 1.5s ease-in-out infinite; }
.headshot img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;
  opacity: 0; transition: opacity .3s; }
.headshot img.loaded { opacity: 1; }
.grid { display: grid; gap: 1.5rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.card { background: var(--card); border-radius: 1rem; padding: 1.5rem;
  box-shadow: 0 2px 6px rgba(0,0,0,.08); transition: box-shadow .3s, transform .2s; }
.hover-lift:hover { transform: scale(1.02); box-shadow: 0 6px 16px rgba(0,0,0,.12); }
.card-title { font-size: 1.2rem; font-weight: 700; margin: 0 0 .25rem; }
.subtitle { font-weight: 600; margin: 0; }
.muted { color: var(--muted); }
.small { font-size: .875rem; }
.timeline { list-style: none; margin: 0 0 0 1rem; padding: 0; border-left: 2px solid var(--border); }
.timeline-item { position: relative; margin: 0 0 2rem 1.5rem; }
.timeline-dot { position: absolute; left: -2.1rem; top: .5rem; width: 1rem; height: 1rem;
  border-radius: 50%; background: var(--accent); border: 4px solid var(--bg); }
.timeline-header { display: flex; justify-content: space-between; text-decoration: none; }
.timeline-body { padding-top: 1rem; overflow: hidden; animation: open .3s ease-out; }
.contact-card { max-width: 36rem; margin: 0 auto; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-size: .875rem; font-weight: 500; margin-bottom: .25rem; }
.field input, .field textarea { width: 100%; padding: .5rem .75rem; border-radius: .375rem;
  border: 1px solid var(--border); background: var(--card); color: var(--fg); font: inherit; }
.field .invalid { border-color: var(--danger); }
.field-error { margin: .25rem 0 0; font-size: .875rem; color: var(--danger); }
.submit { display: inline-flex; gap: .5rem; align-items: center; padding: .5rem 1rem;
  border: 0; border-radius: .375rem; background: var(--fg); color: var(--bg); cursor: pointer; }
.submit:disabled { opacity: .5; cursor: default; }
.site-footer { background: var(--card); border-top: 1px solid var(--border); padding: 1.5rem 0; }
.footer-row { display: flex; justify-content: space-between; align-items: center; }
.linkedin { color: var(--accent); text-decoration: none; }
.linkedin:hover { text-decoration: underline; }
.toast-region { position: fixed; bottom: 1rem; right: 1rem; list-style: none; margin: 0;
  padding: 0; display: flex; flex-direction: column; gap: .5rem; z-index: 100; }
.toast { background: var(--card); border: 1px solid var(--border); border-radius: .5rem;
  padding: 1rem 1.25rem; min-width: 18rem; box-shadow: 0 6px 16px rgba(0,0,0,.15);
  animation: open .2s ease-out; }
.toast.destructive { background: var(--danger); color: #fff; border-color: var(--danger); }
.toast-title { font-weight: 600; margin: 0 0 .25rem; }
.toast-description { margin: 0; font-size: .875rem; }
.slide-in-left { animation: slide-left .5s ease-out both; }
.slide-in-right { animation: slide-right .5s ease-out both; }
.js [data-reveal] { opacity: 0; transition: opacity .5s ease-out, transform .5s ease-out;
  transition-delay: var(--reveal-delay, 0ms); }
.js [data-reveal="up"] { transform: translateY(20px); }
.js [data-reveal="left"] { transform: translateX(-20px); }
.js [data-reveal].revealed { opacity: 1; transform: none; }
@keyframes open { from { opacity: 0; max-height: 0; } to { opacity: 1; max-height: 40rem; } }
@keyframes pulse { 50% { opacity: .5; } }
@keyframes slide-left { from { opacity: 0; transform: translateX(-20px); } }
@keyframes slide-right { from { opacity: 0; transform: translateX(20px); } }
@media (max-width: 768px) {
  .headshot { display: none; }
  .footer-row { flex-direction: column; gap: 1rem; }
}
"#;
