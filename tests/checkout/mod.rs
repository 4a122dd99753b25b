mod checkout_branch;
