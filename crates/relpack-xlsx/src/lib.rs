mod xlsx_template;

pub use xlsx_template::XlsxTemplate;
