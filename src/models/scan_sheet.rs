use crate::{Properties, Transport};

model! {
    /// Scan sheets (registries) grouping express waybills for pickup.
    ScanSheet => "ScanSheet"
}

impl<'c, T: Transport> ScanSheet<'c, T> {
    /// Add documents to the scan sheet `ref_`, or to a new one when `ref_` is empty.
    pub fn insert_documents(&self, document_refs: &[&str], ref_: &str, date: &str) -> T::Output<'c> {
        self.call(
            "insertDocuments",
            Properties::new()
                .with("DocumentRefs", document_refs)
                .with("Ref", ref_)
                .with("Date", date),
        )
    }

    pub fn get_scan_sheet(&self, ref_: &str, counterparty_ref: &str) -> T::Output<'c> {
        self.call(
            "getScanSheet",
            Properties::new()
                .with("Ref", ref_)
                .with("CounterpartyRef", counterparty_ref),
        )
    }

    pub fn get_scan_sheet_list(&self) -> T::Output<'c> {
        self.call("getScanSheetList", Properties::new())
    }

    pub fn delete_scan_sheet(&self, scan_sheet_refs: &[&str]) -> T::Output<'c> {
        self.call(
            "deleteScanSheet",
            Properties::new().with("ScanSheetRefs", scan_sheet_refs),
        )
    }

    pub fn remove_documents(&self, document_refs: &[&str], ref_: &str) -> T::Output<'c> {
        self.call(
            "removeDocuments",
            Properties::new()
                .with("DocumentRefs", document_refs)
                .with("Ref", ref_),
        )
    }
}
