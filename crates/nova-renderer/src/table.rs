//! Table wrapper class and the stylesheet shipped with rendered tables.

/// Class of the `<div>` every rendered table is wrapped in.
pub const TABLE_WRAPPER_CLASS: &str = "markdown-table";

/// Stylesheet prepended once to a document that contains at least one table.
pub const TABLE_STYLES: &str = r"<style>
.markdown-table {
  width: 100%;
  border-collapse: collapse;
  margin: 1.5rem 0;
  overflow-x: auto;
  display: block;
}
.markdown-table table {
  width: 100%;
  border-collapse: collapse;
  background-color: #1F2937;
  border: 1px solid #374151;
  border-radius: 0.375rem;
}
.markdown-table th {
  background-color: #111827;
  color: #93C5FD;
  font-weight: 600;
  text-align: left;
  padding: 0.75rem 1rem;
  border: 1px solid #374151;
}
.markdown-table td {
  padding: 0.75rem 1rem;
  border: 1px solid #374151;
  color: #D1D5DB;
}
.markdown-table tr:nth-child(even) {
  background-color: #1a202c;
}
.markdown-table tr:hover {
  background-color: #172233;
}
.markdown-table tr {
  border-bottom: 1px solid #374151;
}
</style>
";

/// Opening markup of a wrapped table.
pub(crate) fn open_wrapper(out: &mut String) {
    out.push_str(r#"<div class=""#);
    out.push_str(TABLE_WRAPPER_CLASS);
    out.push_str(r#""><table>"#);
}

/// Closing markup of a wrapped table, including the body opened after the head row.
pub(crate) fn close_wrapper(out: &mut String) {
    out.push_str("</tbody></table></div>");
}
