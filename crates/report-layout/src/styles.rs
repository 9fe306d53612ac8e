//! Stylesheet embedded in printable output

/// Print and screen rules for the page containers and cover variants
pub const PRINT_STYLES: &str = r#"
@page { size: A4 portrait; margin: 0; }
* { -webkit-print-color-adjust: exact; print-color-adjust: exact; box-sizing: border-box; }
body { margin: 0; background: #f1f5f9; font-family: 'Cambria', Georgia, serif; color: #0f172a; }
.report-typography { font-size: 13pt; line-height: 1.5; }
.a4-container { position: relative; width: 210mm; height: 297mm; margin: 0 auto 8mm; padding: 16px; background: #fff; overflow: hidden; page-break-after: always; page-break-inside: avoid; }
.a4-container:last-child { page-break-after: auto; }
.placeholder { color: #94a3b8; }
.header-block { text-align: center; }
.header-block img { width: 24mm; margin-bottom: 6mm; }
.header-block .inst-name { font-weight: bold; text-transform: uppercase; color: #1e3a8a; }
.header-block .inst-region { font-weight: bold; text-transform: uppercase; color: #0284c7; font-size: 10pt; }
.header-block .inst-local { font-weight: bold; text-transform: uppercase; color: #dc2626; }
.title-block { text-align: center; margin-top: 12mm; }
.title-block h1 { font-size: 30pt; text-transform: uppercase; color: #172554; margin: 0; }
.title-block .rule { width: 24mm; height: 1.5mm; margin: 4mm auto; background: #dc2626; border-radius: 1mm; }
.title-block .period { font-size: 15pt; font-weight: bold; letter-spacing: 0.2em; color: #0369a1; text-transform: uppercase; }
.footer-block { position: absolute; bottom: 16mm; left: 20mm; right: 20mm; border-top: 2px solid #e2e8f0; padding-top: 8mm; text-align: center; }
.footer-block .label { font-size: 9pt; letter-spacing: 0.3em; color: #94a3b8; text-transform: uppercase; }
.department { font-size: 22pt; font-weight: 900; text-transform: uppercase; color: #1e3a8a; }
.cover-official { border: 8px solid #f1f5f9; }
.cover-official .band { position: absolute; left: 0; top: 0; bottom: 0; width: 4mm; background: #1e3a8a; }
.cover-prestige { border: 2px solid #1e3a8a; }
.cover-prestige .inner-frame { border: 1px solid #ef4444; height: 100%; padding-top: 16mm; }
.cover-architect { background-image: radial-gradient(#cbd5e1 1px, transparent 1px); background-size: 5mm 5mm; }
.cover-architect .title-panel { background: rgba(255,255,255,0.95); border-top: 4px solid #1e3a8a; border-bottom: 4px solid #1e3a8a; padding: 10mm; }
.cover-vintage { border-top: 16px solid #172554; border-bottom: 16px solid #172554; padding: 12mm; }
.cover-vintage .department { font-style: italic; text-transform: none; }
.cover-spirit .accent { border-left: 8px solid #dc2626; padding-left: 10mm; margin-top: 40mm; text-align: left; }
.cover-minimalist { display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; }
.cover-royal { border: 10px double #1e3a8a; padding: 8mm; }
.cover-royal .inner-frame { border: 2px solid #e0f2fe; height: 100%; text-align: center; padding-top: 20mm; }
.cover-celestial .rays { position: absolute; top: -20mm; right: -20mm; width: 100mm; height: 100mm; background: repeating-conic-gradient(#bae6fd 0 6deg, transparent 6deg 18deg); border-radius: 50%; opacity: 0.3; }
.cover-eco { border: 4px dashed #e2e8f0; padding: 20mm; }
.cover-eco .field { border-left: 8px solid #1e3a8a; padding-left: 8mm; margin-bottom: 8mm; }
.cover-ethereal { background-image: radial-gradient(circle at 10% 10%, #f0f9ff 0, transparent 40%); text-align: center; }
.cover-stainedglass { border: 4px solid #1e3a8a; padding: 3mm; }
.cover-stainedglass .inner-frame { border: 1px solid #ef4444; height: 100%; padding: 12mm; position: relative; }
.cover-stainedglass .department-panel { border-top: 4px solid #1e3a8a; border-bottom: 4px solid #1e3a8a; padding: 16mm 0; margin-top: 40mm; text-align: center; background: rgba(239,246,255,0.3); }
.cover-modern { padding: 0; }
.cover-modern .banner { height: 6mm; background: #1e3a8a; }
.cover-modern .body { padding: 20mm; }
.cover-modern h1 { font-size: 60pt; text-transform: uppercase; color: #172554; margin: 0; }
.content-page { padding: 6mm; display: flex; flex-direction: column; }
.content-page h2.report-heading { font-size: 18pt; text-transform: uppercase; text-align: center; color: #1e3a8a; border-bottom: 3px solid #dc2626; padding-bottom: 2mm; }
.identity-row .label { font-weight: 900; color: #1e3a8a; text-transform: uppercase; margin-right: 2mm; }
section h3 { font-size: 12pt; text-transform: uppercase; color: #1e3a8a; border-bottom: 2px solid #bae6fd; padding-bottom: 1mm; }
section h3 .num { background: #1e3a8a; color: #fff; padding: 0 2mm; margin-right: 2mm; border-radius: 1mm; }
table.activities { width: 100%; border-collapse: collapse; font-size: 9pt; }
table.activities thead { display: table-header-group; background: #1e3a8a; color: #fff; }
table.activities th, table.activities td { border: 1px solid #bfdbfe; padding: 6px 4px; vertical-align: top; }
table.activities td.row-number { text-align: center; font-weight: 900; color: #1e3a8a; }
table.activities tr { page-break-inside: avoid; }
.sub-list { border-left: 4px solid #1e3a8a; padding: 3mm 5mm; margin-bottom: 4mm; page-break-inside: avoid; }
.sub-list .heading { font-weight: 900; text-decoration: underline; text-transform: uppercase; letter-spacing: 0.1em; }
.bullet::before { content: "• "; }
.recommendation::before { content: "⭐ "; }
.signature-place { text-align: right; }
.signature-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6mm; text-align: center; }
.signature-grid .role { font-weight: 900; text-transform: uppercase; border-bottom: 2px solid #ef4444; display: inline-block; }
.signature-grid .sign-space { height: 16mm; }
.page-footer { position: absolute; bottom: 3mm; right: 5mm; font-weight: 900; color: #1e3a8a; opacity: 0.2; font-size: 9pt; }
@media print {
  body { background: #fff; }
  .a4-container { margin: 0; box-shadow: none; }
  .no-print { display: none !important; }
}
"#;
