mod test_ledger;
